use std::io;
use std::path::Path;

use fwaudit_common::FwError;
use fwaudit_common::rules::{ACTIVITY_COLUMNS, ActivityRow};
use tracing::debug;

use crate::table::column_indexes;

/// Reads a firewall activity CSV export. Columns beyond [`ACTIVITY_COLUMNS`] are ignored.
pub fn read_activity_export(path: &Path) -> Result<Vec<ActivityRow>, FwError> {
    let file = std::fs::File::open(path)?;
    read_activity(file, &path.display().to_string())
}

pub fn read_activity<R: io::Read>(reader: R, source_name: &str) -> Result<Vec<ActivityRow>, FwError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let [image, protocol, remote_address, remote_port, local_port, direction, command_line] =
        column_indexes(&headers, ACTIVITY_COLUMNS, source_name)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        rows.push(ActivityRow {
            image_file_name: field(image),
            protocol: field(protocol),
            remote_address: field(remote_address),
            remote_port: field(remote_port),
            local_port: field(local_port),
            connection_direction: field(direction),
            command_line: field(command_line),
        });
    }

    debug!("Read {} activity rows from {source_name}", rows.len());
    Ok(rows)
}
