//! # Subnet Mask Normalization
//!
//! Firewall exports describe address scopes as `address/mask` where the mask is a
//! dotted-decimal netmask (`10.0.0.0/255.0.0.0`). Summaries and diffs want the
//! prefix-length form (`10.0.0.0/8`) instead.
//!
//! Conversion is best effort: anything that does not look like a mask comes back
//! untouched. The same handful of masks repeat across thousands of rules, so the
//! results are memoized in a [`CidrCache`] owned by the caller.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

/// Memo table for mask -> prefix-length conversions.
///
/// Holds no meaning beyond the cached results, clearing it never changes output.
#[derive(Debug, Default)]
pub struct CidrCache {
    prefixes: HashMap<String, String>,
}

impl CidrCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a subnet mask to its prefix length, e.g. `255.255.255.0` -> `24`.
    ///
    /// Accepts dotted netmasks, dotted hostmasks (`0.0.0.255`) and bare prefix
    /// lengths. Returns `mask` unchanged when it is none of those.
    pub fn to_cidr(&mut self, mask: &str) -> String {
        if let Some(prefix) = self.prefixes.get(mask) {
            return prefix.clone();
        }
        let prefix = mask_to_prefix(mask)
            .map(|prefix| prefix.to_string())
            .unwrap_or_else(|| mask.to_string());
        self.prefixes.insert(mask.to_string(), prefix.clone());
        prefix
    }

    /// Rewrites one `address/mask` entry into `address/prefix`.
    ///
    /// Entries without exactly one `/` (`LocalSubnet`, a bare host) are returned as is.
    pub fn subnet_to_cidr(&mut self, entry: &str) -> String {
        let mut parts = entry.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(ip), Some(mask), None) => format!("{ip}/{}", self.to_cidr(mask)),
            _ => entry.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn clear(&mut self) {
        self.prefixes.clear();
    }
}

fn mask_to_prefix(mask: &str) -> Option<u8> {
    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        return mask.parse::<u8>().ok().filter(|prefix| *prefix <= 32);
    }

    let addr: Ipv4Addr = mask.parse().ok()?;
    netmask_prefix(addr).or_else(|| netmask_prefix(!addr))
}

fn netmask_prefix(netmask: Ipv4Addr) -> Option<u8> {
    Ipv4Network::with_netmask(Ipv4Addr::UNSPECIFIED, netmask)
        .ok()
        .map(|network| network.prefix())
}
