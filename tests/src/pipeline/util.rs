use std::path::{Path, PathBuf};

use fwaudit_common::rules::PortField;
use fwaudit_core::aggregator;
use fwaudit_formats::{activity, output, table};

pub const ACTIVITY_HEADER: &str =
    "ImageFileName,Protocol,RemoteAddress,RemotePort,LocalPort,ConnectionDirection,CommandLine";

pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Builds an activity export from `(image, protocol, remote, remote port, local port, direction, command line)` rows.
pub fn activity_csv(rows: &[[&str; 7]]) -> String {
    let mut csv = format!("{ACTIVITY_HEADER}\n");
    for row in rows {
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// Summarises `export` and writes the `port_field` table under `name`.
pub fn summarise_to(dir: &Path, export: &Path, port_field: PortField, name: &str) -> PathBuf {
    let rows = activity::read_activity_export(export).unwrap();
    let summaries = aggregator::aggregate(&rows);
    let path = dir.join(name);
    table::write_summary(&path, summaries.get(port_field)).unwrap();
    path
}

pub fn summary_name(port_field: PortField) -> String {
    output::summary_file_name(port_field, "20240519T000000")
}
