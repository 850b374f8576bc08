//! Rastersim Core Library
//!
//! Core functionality for computing thresholded Jaccard similarity between
//! raster priority layers.

pub mod config;
pub mod decoders;
pub mod exporters;
pub mod logging;
pub mod models;
pub mod progress;
pub mod similarity;

// Re-export commonly used types
pub use logging::{ConsoleLogger, LogSink, NullLogger};
pub use models::{
    ComparisonRecord, ComparisonTable, CrossJaccardOptions, JaccardOptions, RasterGrid,
};
pub use similarity::{compute_jaccard, cross_jaccard};
