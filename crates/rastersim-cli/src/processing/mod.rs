//! Input handling shared by the CLI subcommands.

mod input;

pub use input::{expand_inputs, SUPPORTED_EXTENSIONS};
