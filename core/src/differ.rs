//! # Summary Diffing
//!
//! Compares an original and an updated summary of the same direction and reports
//! every rule key that appeared, disappeared, or changed its remote addresses.
//! Keys whose address set is unchanged produce nothing.
//!
//! The report lists additions, then deletions, then modifications, each in key order.

use fwaudit_common::FwError;
use fwaudit_common::rules::{ChangeType, DiffEntry, DiffReport, SummaryTable};
use tracing::debug;

/// Fails unless both tables are keyed by the same port column.
pub fn check_compatible(original: &SummaryTable, updated: &SummaryTable) -> Result<(), FwError> {
    if original.port_field() != updated.port_field() {
        return Err(FwError::PortFieldMismatch {
            original: original.port_field(),
            updated: updated.port_field(),
        });
    }
    Ok(())
}

pub fn diff(original: &SummaryTable, updated: &SummaryTable) -> Result<DiffReport, FwError> {
    check_compatible(original, updated)?;

    let mut entries: Vec<DiffEntry> = Vec::new();

    for (key, current) in updated.iter() {
        if !original.contains(key) {
            entries.push(DiffEntry::added(key.clone(), current.clone()));
        }
    }

    for (key, before) in original.iter() {
        if !updated.contains(key) {
            entries.push(DiffEntry::deleted(key.clone(), before.clone()));
        }
    }

    for (key, before) in original.iter() {
        let Some(current) = updated.get(key) else {
            continue;
        };
        if before != current {
            entries.push(DiffEntry::modified(key.clone(), before.clone(), current.clone()));
        }
    }

    let report = DiffReport {
        port_field: original.port_field(),
        entries,
    };
    debug!(
        "{} added, {} deleted, {} modified",
        report.count(ChangeType::Added),
        report.count(ChangeType::Deleted),
        report.count(ChangeType::Modified)
    );
    Ok(report)
}
