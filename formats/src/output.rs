//! # Output Files
//!
//! Every table is written to a temporary file next to its destination and only
//! renamed into place once the last record is flushed. A failed run leaves no
//! half-written table behind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use fwaudit_common::FwError;
use fwaudit_common::rules::PortField;
use tempfile::NamedTempFile;

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Run timestamp used in summary and comparison file names, local time.
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// `CSSum-Outbound-<ts>.csv` / `CSSum-Inbound-<ts>.csv`
pub fn summary_file_name(port_field: PortField, timestamp: &str) -> String {
    format!("CSSum-{port_field}-{timestamp}.csv")
}

/// `CSCom-results-<ts>.csv`
pub fn comparison_file_name(timestamp: &str) -> String {
    format!("CSCom-results-{timestamp}.csv")
}

/// `InboundFirewallRules.csv` / `OutboundFirewallRules.csv`
pub fn rule_table_file_name(rule_type: &str) -> String {
    format!("{rule_type}.csv")
}

/// Opens a CSV writer on a temporary file and moves the result to `path`.
pub fn write_csv<F>(path: &Path, write: F) -> Result<PathBuf, FwError>
where
    F: FnOnce(&mut csv::Writer<&mut File>) -> Result<(), FwError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir)?;

    {
        let mut writer = csv::Writer::from_writer(staging.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    staging.as_file_mut().flush()?;

    staging.persist(path).map_err(|e| e.error)?;
    Ok(path.to_path_buf())
}
