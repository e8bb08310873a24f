//! # fwaudit formats
//!
//! Reading and writing the files the tool works on.
//!
//! * [`policy`]: Windows Firewall Group Policy XML exports.
//! * [`activity`]: firewall activity CSV exports.
//! * [`table`]: summary, diff and rule CSV tables.
//! * [`output`]: output file naming and all-or-nothing file writes.

pub mod activity;
pub mod output;
pub mod policy;
pub mod table;
