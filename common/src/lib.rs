//! # fwaudit common
//!
//! Shared models for the firewall audit workspace.
//!
//! * **[`rules`]**: rule keys, address sets, summary rows and diff entries.
//! * **[`network`]**: subnet mask to CIDR conversion with an explicit memo cache.
//! * **[`error`]**: the error taxonomy used by the library crates.
//! * **[`config`]**: run settings handed down from the command line.

pub mod config;
pub mod error;
pub mod network;
pub mod rules;

pub use error::FwError;
