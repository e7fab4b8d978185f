//! Configuration system
//!
//! Provides centralized configuration management with:
//! - Config file loading (optional)
//! - Environment variable overrides
//! - Runtime defaults
//! - Validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Where datasets and logs live
    pub paths: PathsConfig,

    /// Report rendering
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// `console`, `file` or `both`
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`
    pub data_dir: PathBuf,
    pub log_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print how long each statistics section took
    pub show_timing: bool,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "WARN".to_string(),
            format: "pretty".to_string(),
            output: "console".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_directory: PathBuf::from("logs"),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_timing: true,
            color: true,
        }
    }
}

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
const LOG_OUTPUTS: [&str; 3] = ["console", "file", "both"];

impl Config {
    /// Candidate config files, first match wins
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("bikeshare.toml"),
            PathBuf::from(".bikeshare.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("bikeshare").join("config.toml"));
        }
        paths
    }

    /// The config file to read: `explicit` if given, else the first search
    /// path that exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().find(|p| p.exists()),
        }
    }

    /// Load configuration from an explicit file or the search paths, then
    /// apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Self::locate(explicit).as_deref())
    }

    /// Load `file` (defaults when `None`), then apply environment overrides.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        if let Ok(val) = env::var("BIKESHARE_DATA_DIR") {
            self.paths.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BIKESHARE_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        if let Ok(val) = env::var("BIKESHARE_SHOW_TIMING") {
            self.display.show_timing = val
                .parse()
                .context("Invalid BIKESHARE_SHOW_TIMING")?;
        }
        if let Ok(val) = env::var("BIKESHARE_COLOR") {
            self.display.color = val.parse().context("Invalid BIKESHARE_COLOR")?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!(
                "Log format must be one of {}, got '{}'",
                LOG_FORMATS.join(", "),
                self.logging.format
            );
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            anyhow::bail!(
                "Log output must be one of {}, got '{}'",
                LOG_OUTPUTS.join(", "),
                self.logging.output
            );
        }

        if self.logging.output != "console" && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory)
                .context("Failed to create log directory")?;
        }

        Ok(())
    }

    /// Warn about a data directory that is missing. Call once logging is up.
    pub fn check_data_dir(&self) -> bool {
        let exists = self.paths.data_dir.is_dir();
        if !exists {
            warn!(
                data_dir = %self.paths.data_dir.display(),
                "Data directory does not exist, loads will fail"
            );
        }
        exists
    }

    /// Save current configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }
}

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install `config` as the global configuration. The first call wins; later
/// calls return the already installed value.
pub fn init_config(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Get the global configuration instance, loading defaults and environment
/// overrides if none was installed. A broken environment falls back to
/// defaults.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        Config::load(None).unwrap_or_else(|err| {
            warn!(error = %err, "Falling back to default configuration");
            Config::default()
        })
    })
}
