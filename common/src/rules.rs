//! # Firewall Rule Models
//!
//! * [`key::RuleKey`]: the identity of a rule, independent of its remote addresses.
//! * [`key::PortField`]: whether a table is keyed by local (inbound) or remote (outbound) port.
//! * [`address::AddressSet`]: canonical, numerically sorted remote addresses.
//! * [`summary::SummaryTable`]: one aggregated row per rule key.
//! * [`diff::DiffEntry`]: the change of one rule key between two summaries.
//! * [`record::RuleTable`]: flat records extracted from a policy export.
//! * [`activity::ActivityRow`]: one raw connection from an activity export.

pub mod activity;
pub mod address;
pub mod diff;
pub mod key;
pub mod record;
pub mod summary;

pub use activity::{ACTIVITY_COLUMNS, ActivityRow};
pub use address::AddressSet;
pub use diff::{ChangeType, DiffEntry, DiffReport};
pub use key::{PortField, RuleKey};
pub use record::{FirewallRule, RawRule, RuleTable};
pub use summary::{SummaryRow, SummaryTable};
