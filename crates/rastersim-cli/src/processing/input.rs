//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported raster extensions for batch comparison
pub const SUPPORTED_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// Expand a list of inputs (files and directories) into a list of raster
/// files.
///
/// Directories are scanned for supported raster files (.tif, .tiff). The
/// result is sorted so pair ordering stays consistent between runs.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_rasters_from_dir(input, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    files.sort();
    Ok(files)
}

/// Collect raster files from a directory.
fn collect_rasters_from_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }
    Ok(())
}
