use thiserror::Error;

use crate::rules::PortField;

/// Failures surfaced by the extraction, aggregation and diff stages.
///
/// Malformed subnet masks are not in here: they pass through unchanged.
#[derive(Debug, Error)]
pub enum FwError {
    #[error("missing required column(s) {missing:?} in {source_name}")]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
    },

    #[error(
        "cannot compare a {original} summary with a {updated} summary; \
         both tables must use the same port column"
    )]
    PortFieldMismatch {
        original: PortField,
        updated: PortField,
    },

    #[error("{source_name} has no LocalPort or RemotePort column (or has both)")]
    UnknownPortField { source_name: String },

    #[error("rule {key} appears more than once in {source_name}")]
    DuplicateKey { source_name: String, key: String },

    #[error("malformed XML: {0}")]
    Xml(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
