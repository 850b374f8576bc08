//! All-pairs Jaccard comparison across a set of raster layers.

use std::time::Instant;

use crate::logging::{ConsoleLogger, LogSink};
use crate::models::{
    ComparisonRecord, ComparisonTable, CrossJaccardOptions, JaccardOptions, RasterGrid,
};
use crate::progress::format_progress;

use super::compute_jaccard;

/// Tolerances used when matching cell values against the no-data sentinel.
const NODATA_ABS_TOL: f32 = 1e-8;
const NODATA_REL_TOL: f32 = 1e-5;

/// Working copy of a grid with no-data cells replaced by 0.0 background, so
/// they never count as selected at any positive threshold.
pub(crate) fn substitute_nodata(grid: &RasterGrid) -> Vec<f32> {
    match grid.nodata {
        Some(nodata) => {
            let tol = NODATA_ABS_TOL + NODATA_REL_TOL * nodata.abs();
            grid.data
                .iter()
                .map(|&v| if (v - nodata).abs() <= tol { 0.0 } else { v })
                .collect()
        }
        None => grid.data.clone(),
    }
}

/// Calculate Jaccard coefficients between all pairs of input rasters.
///
/// Compares top fractions of the landscape: for each threshold `t` both
/// grids of a pair are binarized over the fixed range `[t, 1.0]`, and every
/// unordered pair (i, j) with i < j is evaluated exactly once, in ascending
/// (i, j) order within each threshold. Thresholds are processed in the given
/// order. Each grid is resolved to a working copy once, with cells matching
/// its no-data sentinel zeroed first.
///
/// When `log` is `None`, a console logger honoring `verbose` is used. A
/// failed evaluation aborts the whole batch; no partial table is returned.
pub fn cross_jaccard(
    rasters: &[RasterGrid],
    thresholds: &[f32],
    opts: &CrossJaccardOptions,
    verbose: bool,
    log: Option<&dyn LogSink>,
) -> Result<ComparisonTable, String> {
    let all_start = Instant::now();

    let console;
    let log: &dyn LogSink = match log {
        Some(sink) => sink,
        None => {
            console = ConsoleLogger::new(verbose);
            &console
        }
    };

    if rasters.len() < 2 {
        return Err(format!(
            "More than one input raster is needed, got {}",
            rasters.len()
        ));
    }
    if thresholds.is_empty() {
        return Err("At least one threshold is needed".to_string());
    }

    let cell_count = rasters[0].data.len();
    for grid in &rasters[1..] {
        if grid.data.len() != cell_count {
            return Err(format!(
                "Grid size mismatch: {} has {} cells, {} has {}",
                rasters[0].id,
                cell_count,
                grid.id,
                grid.data.len()
            ));
        }
    }

    log.info(" [** COMPUTING JACCARD INDICES **]");

    // Resolve every grid once; no-data cells become background.
    let working: Vec<Vec<f32>> = rasters.iter().map(substitute_nodata).collect();

    let n_rasters = rasters.len();
    let n_computations = n_rasters * (n_rasters - 1) / 2 * thresholds.len();
    let mut no_computation = 1usize;

    let mut table = ComparisonTable::with_capacity(n_computations);

    for &threshold in thresholds {
        for i in 0..n_rasters {
            for j in (i + 1)..n_rasters {
                let prefix = format_progress(no_computation, n_computations);
                log.info(&format!(
                    "{} Calculating Jaccard index for [{}, 1.0] between {} and {}",
                    prefix, threshold, rasters[i].id, rasters[j].id
                ));

                let pair_opts = JaccardOptions {
                    x_min: threshold,
                    x_max: 1.0,
                    y_min: threshold,
                    y_max: 1.0,
                    limit_tolerance: opts.limit_tolerance,
                    warn_uneven: opts.warn_uneven,
                    disable_checks: opts.disable_checks,
                };
                let coef = compute_jaccard(&working[i], &working[j], &pair_opts, log)?;

                table.records.push(ComparisonRecord {
                    feature1: rasters[i].id.clone(),
                    feature2: rasters[j].id.clone(),
                    threshold,
                    coef,
                });
                no_computation += 1;
            }
        }
    }

    let elapsed = all_start.elapsed().as_secs_f64();
    log.info(&format!(" [TIME] All processing took {:.2} sec", elapsed));

    Ok(table)
}
