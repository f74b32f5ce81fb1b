//! Core data model: regions, per-species records, diagnostics, and the
//! injectable configuration tables.

pub mod config;
pub mod diagnostics;
pub mod region;
pub mod types;
