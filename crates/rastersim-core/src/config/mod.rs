//! Comparison configuration management.
//!
//! This module provides configuration loading, global verbose flag
//! management, and the default comparison parameters.

mod defaults;

pub use defaults::CompareDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["similarity.yml", "similarity.yaml", "similarity_defaults.yml"];

/// Stores the loaded configuration, its source path, and any warnings
/// produced while loading it.
pub struct CompareConfigHandle {
    pub config: CompareConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CompareConfig {
    pub defaults: CompareDefaults,
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_compare_config(custom_path: Option<&Path>) -> CompareConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<CompareConfig>(&contents) {
                Ok(mut config) => {
                    warnings.extend(config.defaults.sanitize());
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return CompareConfigHandle {
                        config,
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse similarity config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read similarity config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No similarity config found; using built-in defaults.".to_string());
    CompareConfigHandle {
        config: CompareConfig::default(),
        source: None,
        warnings,
    }
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("RASTERSIM_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("rastersim").join(name));
        }
    }

    candidates
}

static COMPARE_CONFIG_HANDLE: OnceLock<CompareConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global comparison configuration (loaded once per process).
pub fn compare_config_handle() -> &'static CompareConfigHandle {
    COMPARE_CONFIG_HANDLE.get_or_init(|| load_compare_config(None))
}

/// Print config source and warnings the first time it is requested (only in
/// verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = compare_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[rastersim] Loaded similarity config from {}", source.display());
        } else {
            eprintln!("[rastersim] Using built-in similarity defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[rastersim] Config warning: {}", warning);
        }
    });
}
