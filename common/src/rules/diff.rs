use std::fmt;

use crate::rules::{AddressSet, PortField, RuleKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeType::Added => "Added",
            ChangeType::Deleted => "Deleted",
            ChangeType::Modified => "Modified",
        };
        f.write_str(name)
    }
}

/// How one rule key changed between an original and an updated summary.
///
/// `current` is empty for deletions, `original` is empty for additions. The
/// `added`/`removed` deltas are only populated for modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub key: RuleKey,
    pub change: ChangeType,
    pub current: Option<AddressSet>,
    pub original: Option<AddressSet>,
    pub added: AddressSet,
    pub removed: AddressSet,
}

impl DiffEntry {
    pub fn added(key: RuleKey, current: AddressSet) -> Self {
        Self {
            key,
            change: ChangeType::Added,
            current: Some(current),
            original: None,
            added: AddressSet::new(),
            removed: AddressSet::new(),
        }
    }

    pub fn deleted(key: RuleKey, original: AddressSet) -> Self {
        Self {
            key,
            change: ChangeType::Deleted,
            current: None,
            original: Some(original),
            added: AddressSet::new(),
            removed: AddressSet::new(),
        }
    }

    pub fn modified(key: RuleKey, original: AddressSet, current: AddressSet) -> Self {
        let added = current.difference(&original);
        let removed = original.difference(&current);
        Self {
            key,
            change: ChangeType::Modified,
            current: Some(current),
            original: Some(original),
            added,
            removed,
        }
    }

    /// CSV record in [`DiffReport::columns`] order; missing sets render empty.
    pub fn to_record(&self) -> [String; 9] {
        let render = |set: &Option<AddressSet>| set.as_ref().map(ToString::to_string).unwrap_or_default();
        [
            self.key.service.clone(),
            self.key.executable.clone(),
            self.key.protocol.clone(),
            self.key.port.clone(),
            self.change.to_string(),
            render(&self.current),
            render(&self.original),
            self.added.to_string(),
            self.removed.to_string(),
        ]
    }
}

/// Unified diff of two summaries of the same direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub port_field: PortField,
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    pub fn columns(&self) -> [&'static str; 9] {
        [
            "Svc",
            "ImageFileName",
            "Protocol",
            self.port_field.column(),
            "ChangeType",
            "RemoteAddress",
            "RemoteAddress_original",
            "RemoteAddress_add",
            "RemoteAddress_remove",
        ]
    }

    pub fn count(&self, change: ChangeType) -> usize {
        self.entries.iter().filter(|entry| entry.change == change).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modified_entry_computes_both_deltas() {
        let entry = DiffEntry::modified(
            RuleKey::new("app.exe", "6", "443", ""),
            AddressSet::parse("1.1.1.1; 3.3.3.3"),
            AddressSet::parse("1.1.1.1; 2.2.2.2"),
        );
        assert_eq!(entry.added.to_string(), "2.2.2.2");
        assert_eq!(entry.removed.to_string(), "3.3.3.3");
    }

    #[test]
    fn records_render_missing_sets_as_empty() {
        let entry = DiffEntry::deleted(
            RuleKey::new("app.exe", "6", "443", "Svc1"),
            AddressSet::parse("1.1.1.1"),
        );
        let record = entry.to_record();
        assert_eq!(record[0], "Svc1");
        assert_eq!(record[4], "Deleted");
        assert_eq!(record[5], "");
        assert_eq!(record[6], "1.1.1.1");
        assert_eq!(record[7], "");
        assert_eq!(record[8], "");
    }

    #[test]
    fn report_counts_by_change_type() {
        let key = |exe: &str| RuleKey::new(exe, "6", "80", "");
        let report = DiffReport {
            port_field: PortField::Inbound,
            entries: vec![
                DiffEntry::added(key("a.exe"), AddressSet::parse("1.1.1.1")),
                DiffEntry::added(key("b.exe"), AddressSet::parse("1.1.1.1")),
                DiffEntry::deleted(key("c.exe"), AddressSet::parse("1.1.1.1")),
            ],
        };
        assert_eq!(report.count(ChangeType::Added), 2);
        assert_eq!(report.count(ChangeType::Deleted), 1);
        assert_eq!(report.count(ChangeType::Modified), 0);
        assert_eq!(report.columns()[3], "LocalPort");
    }
}
