//! Shared utilities for rastersim-cli
//!
//! Reusable parsing and input-handling functions shared by the CLI
//! subcommands.

pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_limits, parse_thresholds};
pub use processing::{expand_inputs, SUPPORTED_EXTENSIONS};
