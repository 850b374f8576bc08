use clap::{Parser, Subcommand};
use rastersim_cli::{expand_inputs, parse_limits, parse_thresholds};
use rastersim_core::models::{ComparisonTable, CrossJaccardOptions, JaccardOptions, RasterGrid};
use rastersim_core::ConsoleLogger;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rastersim")]
#[command(version, about = "Pairwise Jaccard similarity between raster layers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare all pairs of input rasters at one or more thresholds
    Compare {
        /// Input raster files or directories
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Comma-separated inclusion thresholds (default from config)
        #[arg(short, long, value_name = "T1,T2,...")]
        thresholds: Option<String>,

        /// Write the comparison table as CSV
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Write the comparison table as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Number of parallel decode threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Decimal digits used when rounding observed extrema for
        /// threshold validation
        #[arg(long, value_name = "DIGITS")]
        tolerance: Option<i32>,

        /// Skip validation of thresholds against actual raster values
        #[arg(long)]
        no_checks: bool,

        /// Suppress the uneven-coverage advisory
        #[arg(long)]
        no_uneven_warning: bool,

        /// Print per-step debug information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute the Jaccard coefficient for a single pair with explicit limits
    Pair {
        /// First raster
        first: PathBuf,

        /// Second raster
        second: PathBuf,

        /// Inclusive limits for the first raster
        #[arg(long, value_name = "MIN,MAX", default_value = "0.0,1.0")]
        x_limits: String,

        /// Inclusive limits for the second raster
        #[arg(long, value_name = "MIN,MAX", default_value = "0.0,1.0")]
        y_limits: String,

        /// Decimal digits used when rounding observed extrema for
        /// limit validation
        #[arg(long, value_name = "DIGITS")]
        tolerance: Option<i32>,

        /// Skip validation of limits against actual raster values
        #[arg(long)]
        no_checks: bool,

        /// Print per-step debug information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print raster dimensions, no-data sentinel and value statistics
    Info {
        /// Input raster file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            inputs,
            thresholds,
            out,
            json,
            threads,
            tolerance,
            no_checks,
            no_uneven_warning,
            verbose,
        } => cmd_compare(
            inputs,
            thresholds,
            out,
            json,
            threads,
            tolerance,
            no_checks,
            no_uneven_warning,
            verbose,
        ),

        Commands::Pair {
            first,
            second,
            x_limits,
            y_limits,
            tolerance,
            no_checks,
            verbose,
        } => cmd_pair(first, second, x_limits, y_limits, tolerance, no_checks, verbose),

        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compare(
    inputs: Vec<PathBuf>,
    thresholds: Option<String>,
    out: Option<PathBuf>,
    json: Option<PathBuf>,
    threads: Option<usize>,
    tolerance: Option<i32>,
    no_checks: bool,
    no_uneven_warning: bool,
    verbose: bool,
) -> Result<(), String> {
    rastersim_core::config::set_verbose(verbose);
    rastersim_core::config::log_config_usage();

    let defaults = &rastersim_core::config::compare_config_handle().config.defaults;

    let thresholds = match thresholds {
        Some(raw) => parse_thresholds(&raw)?,
        None => defaults.thresholds.clone(),
    };

    let files = expand_inputs(&inputs)?;
    if files.len() < 2 {
        return Err(format!(
            "More than one input raster is needed, got {}",
            files.len()
        ));
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel decoding", num_threads);
    }

    println!("Decoding {} rasters...", files.len());
    let rasters: Vec<RasterGrid> = files
        .par_iter()
        .map(rastersim_core::decoders::decode_raster)
        .collect::<Result<Vec<_>, String>>()?;
    rastersim_core::verbose_println!("Decoded {} rasters", rasters.len());

    let opts = CrossJaccardOptions {
        limit_tolerance: tolerance.unwrap_or(defaults.limit_tolerance),
        warn_uneven: !no_uneven_warning && defaults.warn_uneven,
        disable_checks: no_checks || defaults.disable_checks,
    };

    let table = rastersim_core::cross_jaccard(&rasters, &thresholds, &opts, verbose, None)?;

    print_table(&table);

    if let Some(path) = out {
        rastersim_core::exporters::export_csv(&table, &path)?;
        println!("Comparison table saved to: {}", path.display());
    }
    if let Some(path) = json {
        rastersim_core::exporters::export_json(&table, &path)?;
        println!("Comparison table saved to: {}", path.display());
    }

    Ok(())
}

fn cmd_pair(
    first: PathBuf,
    second: PathBuf,
    x_limits: String,
    y_limits: String,
    tolerance: Option<i32>,
    no_checks: bool,
    verbose: bool,
) -> Result<(), String> {
    rastersim_core::config::set_verbose(verbose);
    rastersim_core::config::log_config_usage();

    let defaults = &rastersim_core::config::compare_config_handle().config.defaults;

    let (x_min, x_max) = parse_limits(&x_limits)?;
    let (y_min, y_max) = parse_limits(&y_limits)?;

    println!("Decoding {}...", first.display());
    let x = rastersim_core::decoders::decode_raster(&first)?;
    println!("Decoding {}...", second.display());
    let y = rastersim_core::decoders::decode_raster(&second)?;

    let opts = JaccardOptions {
        x_min,
        x_max,
        y_min,
        y_max,
        limit_tolerance: tolerance.unwrap_or(defaults.limit_tolerance),
        warn_uneven: defaults.warn_uneven,
        disable_checks: no_checks || defaults.disable_checks,
    };

    let log = ConsoleLogger::new(verbose);
    let coef = rastersim_core::compute_jaccard(&x.data, &y.data, &opts, &log)?;

    println!(
        "Jaccard index for [{}, {}] vs [{}, {}]: {:.4}",
        x_min, x_max, y_min, y_max, coef
    );
    Ok(())
}

fn cmd_info(input: PathBuf) -> Result<(), String> {
    let grid = rastersim_core::decoders::decode_raster(&input)?;

    println!("Raster: {}", grid.id);
    println!("  Dimensions: {}x{}", grid.width, grid.height);
    println!("  Cells: {}", grid.len());
    match grid.nodata {
        Some(value) => println!("  NoData: {}", value),
        None => println!("  NoData: none"),
    }
    if let Some((min, max)) = grid.value_range() {
        println!("  Value range: {} to {}", min, max);
    }
    if let Some(mean) = grid.mean() {
        println!("  Mean value: {:.6}", mean);
    }

    Ok(())
}

fn print_table(table: &ComparisonTable) {
    println!();
    println!(
        "{:<32} {:<32} {:>9} {:>8}",
        "feature1", "feature2", "threshold", "coef"
    );
    for record in &table.records {
        println!(
            "{:<32} {:<32} {:>9.3} {:>8.4}",
            record.feature1, record.feature2, record.threshold, record.coef
        );
    }
    println!("{} rows", table.len());
}
