//! # fwaudit core
//!
//! The three processing stages, free of any file handling:
//!
//! * [`extractor`]: flattens policy rule elements into fixed-shape records.
//! * [`aggregator`]: folds activity rows into per-rule summary tables.
//! * [`differ`]: classifies the changes between two summary tables.

pub mod aggregator;
pub mod differ;
pub mod extractor;
