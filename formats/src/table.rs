//! # CSV Tables
//!
//! Readers and writers for the three tables the tool produces: flattened policy
//! rules, per-direction summaries, and comparison reports.

use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use fwaudit_common::FwError;
use fwaudit_common::rules::{AddressSet, DiffReport, PortField, RuleKey, RuleTable, SummaryTable};
use tracing::debug;

use crate::output::write_csv;

/// Positions of `names` in `headers`, or every missing name at once.
pub fn column_indexes<const N: usize>(
    headers: &StringRecord,
    names: [&str; N],
    source_name: &str,
) -> Result<[usize; N], FwError> {
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| clean_header(header) == name)
    };

    let missing: Vec<String> = names
        .iter()
        .filter(|name| position(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FwError::MissingColumns {
            source_name: source_name.to_string(),
            missing,
        });
    }

    Ok(names.map(|name| position(name).unwrap_or_default()))
}

fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

pub fn write_rule_table(path: &Path, table: &RuleTable) -> Result<PathBuf, FwError> {
    write_csv(path, |writer| {
        if !table.fields.is_empty() {
            writer.write_record(&table.fields)?;
        }
        for rule in &table.rules {
            writer.write_record(rule.values())?;
        }
        Ok(())
    })
}

pub fn write_summary(path: &Path, table: &SummaryTable) -> Result<PathBuf, FwError> {
    write_csv(path, |writer| {
        writer.write_record(table.columns())?;
        for (key, addresses) in table.iter() {
            let addresses = addresses.to_string();
            writer.write_record([
                key.service.as_str(),
                key.executable.as_str(),
                key.protocol.as_str(),
                key.port.as_str(),
                addresses.as_str(),
            ])?;
        }
        Ok(())
    })
}

pub fn read_summary_file(path: &Path) -> Result<SummaryTable, FwError> {
    let file = std::fs::File::open(path)?;
    read_summary(file, &path.display().to_string())
}

/// Loads a summary table. The port column present in the header decides its direction.
pub fn read_summary<R: io::Read>(reader: R, source_name: &str) -> Result<SummaryTable, FwError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let port_field = PortField::from_headers(headers.iter().map(clean_header)).ok_or_else(|| {
        FwError::UnknownPortField {
            source_name: source_name.to_string(),
        }
    })?;

    let [service, executable, protocol, port, addresses] = column_indexes(
        &headers,
        ["Svc", "ImageFileName", "Protocol", port_field.column(), "RemoteAddress"],
        source_name,
    )?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or_default();
        rows.push((
            RuleKey::new(field(executable), field(protocol), field(port), field(service)),
            AddressSet::parse(field(addresses)),
        ));
    }

    let table = SummaryTable::from_rows(port_field, rows, source_name)?;
    debug!("Loaded {} {port_field} rules from {source_name}", table.len());
    Ok(table)
}

pub fn write_diff_report(path: &Path, report: &DiffReport) -> Result<PathBuf, FwError> {
    write_csv(path, |writer| {
        writer.write_record(report.columns())?;
        for entry in &report.entries {
            writer.write_record(entry.to_record())?;
        }
        Ok(())
    })
}
