//! Data types shared across the similarity pipeline.

use serde::{Deserialize, Serialize};

/// A single-band raster resolved to an in-memory grid.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    /// Stable identifier used in comparison records (usually the source path)
    pub id: String,

    /// Grid width in cells
    pub width: u32,

    /// Grid height in cells
    pub height: u32,

    /// Cell values in row-major order, `width * height` elements
    pub data: Vec<f32>,

    /// Sentinel value marking cells without data
    pub nodata: Option<f32>,
}

impl RasterGrid {
    /// Build a grid from raw parts, verifying the data length against the
    /// declared dimensions.
    pub fn from_parts(
        id: String,
        width: u32,
        height: u32,
        data: Vec<f32>,
        nodata: Option<f32>,
    ) -> Result<Self, String> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(format!(
                "Raster data length mismatch: expected {} cells ({}x{}), got {}",
                expected,
                width,
                height,
                data.len()
            ));
        }
        Ok(Self {
            id,
            width,
            height,
            data,
            nodata,
        })
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Observed minimum and maximum cell values. `None` for an empty grid.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// Mean cell value. `None` for an empty grid.
    pub fn mean(&self) -> Option<f32> {
        if self.data.is_empty() {
            return None;
        }
        let sum: f32 = self.data.iter().sum();
        Some(sum / self.data.len() as f32)
    }
}

/// Options for a single pairwise Jaccard evaluation.
///
/// The `[min, max]` limits are inclusive and applied independently to each
/// grid. The `[0.0, 1.0]` defaults are geared towards rank priority rasters.
#[derive(Debug, Clone)]
pub struct JaccardOptions {
    /// Inclusive lower limit for the first grid
    pub x_min: f32,
    /// Inclusive upper limit for the first grid
    pub x_max: f32,
    /// Inclusive lower limit for the second grid
    pub y_min: f32,
    /// Inclusive upper limit for the second grid
    pub y_max: f32,
    /// Decimal digits used when rounding observed extrema for limit
    /// validation. Helps with values close to 0 but not quite 0.
    pub limit_tolerance: i32,
    /// Emit an advisory when mask coverages differ more than 20-fold
    pub warn_uneven: bool,
    /// Skip validation of the limits against the actual grid values
    pub disable_checks: bool,
}

impl Default for JaccardOptions {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            limit_tolerance: 4,
            warn_uneven: true,
            disable_checks: false,
        }
    }
}

/// Options shared by every evaluation of an all-pairs comparison.
#[derive(Debug, Clone)]
pub struct CrossJaccardOptions {
    /// Decimal digits used when rounding observed extrema for limit validation
    pub limit_tolerance: i32,
    /// Emit an advisory when mask coverages differ more than 20-fold
    pub warn_uneven: bool,
    /// Skip validation of thresholds against the actual grid values
    pub disable_checks: bool,
}

impl Default for CrossJaccardOptions {
    fn default() -> Self {
        Self {
            limit_tolerance: 4,
            warn_uneven: true,
            disable_checks: false,
        }
    }
}

/// One row of a comparison table: the coefficient for a pair of rasters at
/// one threshold. `feature1` always names the lower-index raster of the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub feature1: String,
    pub feature2: String,
    pub threshold: f32,
    pub coef: f64,
}

/// Ordered collection of comparison records. Row index is the vector
/// position; the table is rebuilt fresh on every comparison run.
#[derive(Debug, Clone, Default)]
pub struct ComparisonTable {
    pub records: Vec<ComparisonRecord>,
}

impl ComparisonTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
