//! CLI command implementations.

pub mod report;
pub mod serve;
