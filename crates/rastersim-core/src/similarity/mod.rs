//! Thresholded Jaccard similarity between numeric grids.
//!
//! The Jaccard coefficient measures similarity between sample sets, and is
//! defined as the size of the intersection divided by the size of the union
//! of the sample sets. Here each grid is reduced to a sample set by an
//! inclusive value range, so the coefficient quantifies how well two layers
//! agree on which cells they select.

mod cross;


pub use cross::cross_jaccard;

use crate::logging::LogSink;
use crate::models::JaccardOptions;

/// Coverage ratio above which the uneven-extent advisory fires.
const UNEVEN_COVERAGE_RATIO: f64 = 20.0;

/// Round `value` to `digits` decimal digits.
fn round_to(value: f32, digits: i32) -> f32 {
    let factor = 10f32.powi(digits);
    (value * factor).round() / factor
}

/// Minimum and maximum of a slice in one pass.
fn value_extrema(data: &[f32]) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in data {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Calculate the Jaccard similarity coefficient between two grids.
///
/// Each grid is binarized by its inclusive `[min, max]` limits from `opts`,
/// and the coefficient is `|x ∩ y| / |x ∪ y|` over the selected cell
/// positions. The computation runs over flattened element order, so the two
/// grids only need matching element counts, not matching shapes. An empty
/// union yields 0.0.
///
/// Unless `opts.disable_checks` is set, the limits are validated against the
/// observed value range of each grid, rounded to `opts.limit_tolerance`
/// decimal digits: both lower limits must be at least the rounded observed
/// minimum, `x_max` must be at least the rounded observed maximum of `x`,
/// and `y_max` must not exceed the rounded observed maximum of `y`.
///
/// When `opts.warn_uneven` is set and the selected extents differ more than
/// 20-fold, an advisory is emitted through `log`; the coefficient is still
/// computed and returned.
pub fn compute_jaccard(
    x: &[f32],
    y: &[f32],
    opts: &JaccardOptions,
    log: &dyn LogSink,
) -> Result<f64, String> {
    if x.is_empty() || y.is_empty() {
        return Err("Cannot compute Jaccard index over empty grids".to_string());
    }
    if x.len() != y.len() {
        return Err(format!(
            "Grid size mismatch: {} vs {} cells",
            x.len(),
            y.len()
        ));
    }

    if !opts.disable_checks {
        let digits = opts.limit_tolerance;
        let (x_obs_min, x_obs_max) = value_extrema(x);
        let (y_obs_min, y_obs_max) = value_extrema(y);

        if opts.x_min < round_to(x_obs_min, digits) {
            return Err(format!(
                "Min threshold {} smaller than computed min {} of x",
                opts.x_min,
                round_to(x_obs_min, digits)
            ));
        }
        if opts.x_max < round_to(x_obs_max, digits) {
            return Err(format!(
                "Max threshold {} smaller than computed max {} of x",
                opts.x_max,
                round_to(x_obs_max, digits)
            ));
        }
        if opts.x_min >= opts.x_max {
            return Err(format!(
                "Min threshold {} for x not below max threshold {}",
                opts.x_min, opts.x_max
            ));
        }
        if opts.y_min < round_to(y_obs_min, digits) {
            return Err(format!(
                "Min threshold {} smaller than computed min {} of y",
                opts.y_min,
                round_to(y_obs_min, digits)
            ));
        }
        if opts.y_max > round_to(y_obs_max, digits) {
            return Err(format!(
                "Max threshold {} larger than computed max {} of y",
                opts.y_max,
                round_to(y_obs_max, digits)
            ));
        }
        if opts.y_min >= opts.y_max {
            return Err(format!(
                "Min threshold {} for y not below max threshold {}",
                opts.y_min, opts.y_max
            ));
        }
    }

    // Inclusive-range binarization over flattened element order
    let x_bin: Vec<bool> = x
        .iter()
        .map(|&v| v >= opts.x_min && v <= opts.x_max)
        .collect();
    let y_bin: Vec<bool> = y
        .iter()
        .map(|&v| v >= opts.y_min && v <= opts.y_max)
        .collect();

    if opts.warn_uneven {
        warn_if_uneven(&x_bin, &y_bin, log);
    }

    let mut intersection = 0usize;
    let mut union = 0usize;
    for (&a, &b) in x_bin.iter().zip(y_bin.iter()) {
        if a && b {
            intersection += 1;
        }
        if a || b {
            union += 1;
        }
    }

    if union == 0 {
        // Neither mask selected anything
        return Ok(0.0);
    }

    Ok(intersection as f64 / union as f64)
}

/// Emit the uneven-coverage advisory when mask sizes differ more than
/// 20-fold. A single empty mask counts as uneven; two empty masks do not.
fn warn_if_uneven(x_bin: &[bool], y_bin: &[bool], log: &dyn LogSink) {
    let x_size = x_bin.iter().filter(|&&b| b).count();
    let y_size = y_bin.iter().filter(|&&b| b).count();
    let (smaller, larger) = if x_size <= y_size {
        (x_size, y_size)
    } else {
        (y_size, x_size)
    };

    let uneven = if smaller == 0 {
        larger > 0
    } else {
        larger as f64 / smaller as f64 > UNEVEN_COVERAGE_RATIO
    };

    if uneven {
        log.warn(
            "The extents of raster values above the threshold differ more \
             than 20-fold: Jaccard coefficient may not be informative.",
        );
    }
}
