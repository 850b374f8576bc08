//! Raster decoders
//!
//! Support for single-band TIFF rasters.

mod tiff;


use std::path::Path;

use crate::models::RasterGrid;

/// Decode a raster from a file path
pub fn decode_raster<P: AsRef<Path>>(path: P) -> Result<RasterGrid, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "tif" | "tiff" => tiff::decode_tiff(path),
        _ => Err(format!("Unsupported raster format: {}", extension)),
    }
}
