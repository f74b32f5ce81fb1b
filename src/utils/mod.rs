//! Shared helpers.

pub mod walk;
