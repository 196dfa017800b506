use crate::defaults::*;
use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

fn default_verbose() -> i8 {
    VERBOSE
}
fn default_rtol() -> f64 {
    RTOL
}
fn default_atol() -> f64 {
    ATOL
}
fn default_tolerance() -> Tolerance {
    Tolerance::default()
}

/// Tolerances for floating point comparisons, with the semantics of
/// `numpy.isclose`: `|a - b| <= atol + rtol * |b|`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    #[serde(default = "default_rtol")]
    pub rtol: f64,
    #[serde(default = "default_atol")]
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            rtol: RTOL,
            atol: ATOL,
        }
    }
}

impl Tolerance {
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_tolerance")]
    pub tolerance: Tolerance,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            verbose: VERBOSE,
            tolerance: Tolerance::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(config_string: &str) -> Result<Self> {
        let config: Self = toml::from_str(config_string).context("Unable to parse settings")?;
        Ok(config)
    }

    /// Reads the settings from a toml file. Missing files and missing keys
    /// fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_file_path: &Path = path.as_ref();
        let config_string: String = if config_file_path.exists() {
            fs::read_to_string(config_file_path).with_context(|| {
                format!("Unable to read config file {}", config_file_path.display())
            })?
        } else {
            String::from("")
        };
        Self::from_toml(&config_string)
    }

    /// Reads `atoms_dump.toml` from the current working directory.
    pub fn from_working_directory() -> Result<Self> {
        Self::load(CONFIG_FILE_NAME)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Unable to serialize settings")
    }

    pub fn log_level(&self) -> LevelFilter {
        level_filter(self.verbose)
    }
}

fn level_filter(verbose: i8) -> LevelFilter {
    match verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger. Calling this more than once keeps the first logger.
pub fn initialize_logger(verbose: i8) {
    let _ = Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, level_filter(verbose))
        .try_init();
}
