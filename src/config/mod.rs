mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::scoring::{validate_scoring, ScoringConfig};

pub const DEFAULT_EXAM_YEAR: i32 = 2025;

/// Get the config directory path (~/.config/exam-calc/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("exam-calc"))
}

/// Get the default config file path (~/.config/exam-calc/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/exam-calc/config.yaml) and falls back to built-in defaults
///   when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Validate the whole config, collecting every problem.
pub fn validate_config(config: &Config) -> std::result::Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(year) = config.exam_year {
        if !(1950..=2100).contains(&year) {
            errors.push(format!("exam_year: must be between 1950 and 2100 (got {})", year));
        }
    }

    if let Some(ref scoring) = config.scoring {
        if let Err(scoring_errors) = validate_scoring(scoring) {
            errors.extend(scoring_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Effective settings after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub exam_year: i32,
    pub scoring: ScoringConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            exam_year: config.exam_year.unwrap_or(DEFAULT_EXAM_YEAR),
            scoring: config.scoring.clone().unwrap_or_default(),
        }
    }
}
