//! # Address Sets
//!
//! Remote addresses observed for a rule, kept distinct and in numeric octet order
//! so two summaries of the same traffic always serialize to the same string.
//!
//! Ordering rules:
//! * Entries are keyed by their leading dotted-quad (`10.0.0.0/8` sorts as `10.0.0.0`).
//! * Entries sharing a dotted-quad are ordered by their full text.
//! * Entries that are not a dotted-quad (IPv6, hostnames, garbage) are kept and sort
//!   after every IPv4 entry, in plain string order.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Separator used inside a single CSV cell.
pub const ADDRESS_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    addresses: Vec<String>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the canonical set from raw addresses in any order, with duplicates.
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = addresses
            .into_iter()
            .map(|address| address.as_ref().trim().to_string())
            .filter(|address| !address.is_empty())
            .collect();

        let mut addresses: Vec<String> = unique.into_iter().collect();
        addresses.sort_by(|a, b| compare_addresses(a, b));
        Self { addresses }
    }

    /// Parses a serialized set. Tolerates `;` without the trailing space.
    pub fn parse(joined: &str) -> Self {
        Self::from_addresses(joined.split(';'))
    }

    /// Addresses in `self` that are not in `other`.
    pub fn difference(&self, other: &AddressSet) -> AddressSet {
        let others: BTreeSet<&str> = other.iter().collect();
        let addresses = self
            .addresses
            .iter()
            .filter(|address| !others.contains(address.as_str()))
            .cloned()
            .collect();
        Self { addresses }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AddressSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_addresses(iter)
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addresses.join(ADDRESS_SEPARATOR))
    }
}

/// Canonical serialized form of `addresses`.
pub fn canonicalize<I, S>(addresses: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AddressSet::from_addresses(addresses).to_string()
}

fn compare_addresses(a: &str, b: &str) -> Ordering {
    match (octets(a), octets(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn octets(address: &str) -> Option<[u8; 4]> {
    let host = address.split('/').next().unwrap_or(address);
    let mut octets = [0u8; 4];
    let mut parts = host.split('.');
    for octet in octets.iter_mut() {
        *octet = parts.next()?.parse().ok()?;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(octets),
    }
}
