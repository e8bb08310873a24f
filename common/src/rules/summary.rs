use std::collections::BTreeMap;

use crate::error::FwError;
use crate::rules::{AddressSet, PortField, RuleKey};

/// Aggregated usage of one rule key: every remote address seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub key: RuleKey,
    pub addresses: AddressSet,
    pub direction: PortField,
}

/// All summary rows of one direction, unique by key and ordered by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    port_field: PortField,
    rows: BTreeMap<RuleKey, AddressSet>,
}

impl SummaryTable {
    pub fn new(port_field: PortField) -> Self {
        Self {
            port_field,
            rows: BTreeMap::new(),
        }
    }

    /// Builds a table from loaded rows. `source_name` only labels the error.
    pub fn from_rows<I>(port_field: PortField, rows: I, source_name: &str) -> Result<Self, FwError>
    where
        I: IntoIterator<Item = (RuleKey, AddressSet)>,
    {
        let mut table = Self::new(port_field);
        for (key, addresses) in rows {
            if table.rows.contains_key(&key) {
                return Err(FwError::DuplicateKey {
                    source_name: source_name.to_string(),
                    key: key.to_string(),
                });
            }
            table.rows.insert(key, addresses);
        }
        Ok(table)
    }

    /// Wraps already-grouped rows; keys of a map are unique by construction.
    pub fn from_groups(port_field: PortField, rows: BTreeMap<RuleKey, AddressSet>) -> Self {
        Self { port_field, rows }
    }

    pub fn port_field(&self) -> PortField {
        self.port_field
    }

    pub fn get(&self, key: &RuleKey) -> Option<&AddressSet> {
        self.rows.get(key)
    }

    pub fn contains(&self, key: &RuleKey) -> bool {
        self.rows.contains_key(key)
    }

    /// Rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &AddressSet)> {
        self.rows.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = SummaryRow> + '_ {
        self.rows.iter().map(|(key, addresses)| SummaryRow {
            key: key.clone(),
            addresses: addresses.clone(),
            direction: self.port_field,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names as written to and read from summary CSVs.
    pub fn columns(&self) -> [&'static str; 5] {
        ["Svc", "ImageFileName", "Protocol", self.port_field.column(), "RemoteAddress"]
    }
}
