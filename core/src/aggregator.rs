//! # Activity Aggregation
//!
//! Folds raw activity rows into one summary row per rule key, per direction.
//!
//! Before grouping, executable paths are normalized so that the same program
//! groups together regardless of which volume ordinal, user profile or agent
//! version it was observed under.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use fwaudit_common::rules::{ActivityRow, AddressSet, PortField, RuleKey, SummaryTable};
use regex::{NoExpand, Regex};
use tracing::{debug, warn};

/// Ordered rewrites for executable paths. Volume rules must run system root first.
static PATH_REWRITES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\\Device\\HarddiskVolume\d+\\Windows\\", r"%SystemRoot%\"),
        (r"\\Device\\HarddiskVolume\d+\\", r"%SystemDrive%\"),
        (r"Users\\[^\\]+\\AppData", r"Users\*\AppData"),
        (r"\\WindowsAzure\\[^\\]+\\", r"\WindowsAzure\*\"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("static path rewrite pattern"), replacement)
    })
    .collect()
});

static SERVICE_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-s (\S+)").expect("static service flag pattern"));

const SERVICE_HOST: &str = r"system32\svchost.exe";

/// Result of one aggregation run.
#[derive(Debug)]
pub struct Summaries {
    pub inbound: SummaryTable,
    pub outbound: SummaryTable,
    /// Rows dropped for having no executable path.
    pub without_image: usize,
    /// Rows dropped for a direction other than `0` or `1`.
    pub unknown_direction: usize,
}

impl Summaries {
    pub fn get(&self, port_field: PortField) -> &SummaryTable {
        match port_field {
            PortField::Inbound => &self.inbound,
            PortField::Outbound => &self.outbound,
        }
    }
}

/// Rewrites device, per-user and versioned agent segments of an executable path.
pub fn normalize_image_path(path: &str) -> String {
    PATH_REWRITES
        .iter()
        .fold(path.to_string(), |path, (pattern, replacement)| {
            pattern.replace_all(&path, NoExpand(replacement)).into_owned()
        })
}

/// Service hosted by a `svchost.exe` command line (the `-s` argument), or empty.
pub fn service_name(command_line: &str) -> String {
    if !command_line.contains(SERVICE_HOST) {
        return String::new();
    }
    SERVICE_FLAG
        .captures(command_line)
        .and_then(|captures| captures.get(1))
        .map(|service| service.as_str().to_string())
        .unwrap_or_default()
}

/// Groups `rows` by rule key, separately for inbound and outbound connections.
pub fn aggregate<'a, I>(rows: I) -> Summaries
where
    I: IntoIterator<Item = &'a ActivityRow>,
{
    let mut inbound: BTreeMap<RuleKey, BTreeSet<&str>> = BTreeMap::new();
    let mut outbound: BTreeMap<RuleKey, BTreeSet<&str>> = BTreeMap::new();
    let mut without_image = 0;
    let mut unknown_direction = 0;

    for row in rows {
        if row.image_file_name.is_empty() {
            without_image += 1;
            continue;
        }

        let Some(direction) = PortField::from_direction(&row.connection_direction) else {
            unknown_direction += 1;
            continue;
        };

        let (groups, port) = match direction {
            PortField::Inbound => (&mut inbound, &row.local_port),
            PortField::Outbound => (&mut outbound, &row.remote_port),
        };

        let key = RuleKey::new(
            normalize_image_path(&row.image_file_name),
            row.protocol.as_str(),
            port.as_str(),
            service_name(&row.command_line),
        );
        groups
            .entry(key)
            .or_default()
            .insert(row.remote_address.as_str());
    }

    if unknown_direction > 0 {
        warn!("Skipped {unknown_direction} rows with an unknown ConnectionDirection");
    }
    debug!(
        "{} inbound and {} outbound rule keys, {without_image} rows without an image",
        inbound.len(),
        outbound.len()
    );

    Summaries {
        inbound: into_table(PortField::Inbound, inbound),
        outbound: into_table(PortField::Outbound, outbound),
        without_image,
        unknown_direction,
    }
}

fn into_table(port_field: PortField, groups: BTreeMap<RuleKey, BTreeSet<&str>>) -> SummaryTable {
    let rows = groups
        .into_iter()
        .map(|(key, addresses)| (key, AddressSet::from_addresses(addresses)))
        .collect();
    SummaryTable::from_groups(port_field, rows)
}
