//! Comparison table exporters
//!
//! Write comparison tables to CSV and JSON files.

use std::path::Path;

use crate::models::ComparisonTable;

/// Write a comparison table as CSV with a `feature1,feature2,threshold,coef`
/// header row.
pub fn export_csv<P: AsRef<Path>>(table: &ComparisonTable, path: P) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| format!("Failed to create CSV file: {}", e))?;

    for record in &table.records {
        writer
            .serialize(record)
            .map_err(|e| format!("Failed to write CSV record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush CSV file: {}", e))?;
    Ok(())
}

/// Write a comparison table as pretty-printed JSON.
pub fn export_json<P: AsRef<Path>>(table: &ComparisonTable, path: P) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&table.records)
        .map_err(|e| format!("Failed to serialize comparison table: {}", e))?;
    std::fs::write(path.as_ref(), json).map_err(|e| format!("Failed to write JSON file: {}", e))?;
    Ok(())
}
