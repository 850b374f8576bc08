//! Default comparison parameter values and their validation.

use serde::Deserialize;

/// Comparison defaults applied when the command line leaves them unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompareDefaults {
    /// Thresholds used when none are given on the command line
    pub thresholds: Vec<f32>,
    /// Decimal digits used when rounding observed extrema for limit validation
    pub limit_tolerance: i32,
    /// Emit the uneven-coverage advisory
    pub warn_uneven: bool,
    /// Skip limit validation against the actual raster values
    pub disable_checks: bool,
}

impl Default for CompareDefaults {
    fn default() -> Self {
        Self {
            thresholds: vec![0.25, 0.5, 0.75, 0.9],
            limit_tolerance: 4,
            warn_uneven: true,
            disable_checks: false,
        }
    }
}

impl CompareDefaults {
    /// Clamp out-of-range values and drop unusable thresholds. Returns a
    /// warning line for every correction made.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0..=10).contains(&self.limit_tolerance) {
            warnings.push(format!(
                "limit_tolerance {} out of range 0-10; using 4",
                self.limit_tolerance
            ));
            self.limit_tolerance = 4;
        }

        let before = self.thresholds.len();
        self.thresholds
            .retain(|t| t.is_finite() && (0.0..1.0).contains(t));
        if self.thresholds.len() != before {
            warnings.push(format!(
                "Dropped {} threshold(s) outside [0.0, 1.0)",
                before - self.thresholds.len()
            ));
        }

        if self.thresholds.is_empty() {
            warnings.push("No usable thresholds configured; using built-in defaults".to_string());
            self.thresholds = Self::default().thresholds;
        }

        warnings
    }
}
