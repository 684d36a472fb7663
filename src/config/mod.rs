use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "BIKESHARE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_raw_page_size")]
    pub raw_page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_raw_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            raw_page_size: default_raw_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".bikeshare")
        }
    }

    /// Return the full path of the config file ($BIKESHARE_CONFIG wins)
    pub fn config_file() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(p.trim()),
            _ => Self::config_dir().join("bikeshare.conf"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    fn validate(&self) -> AppResult<()> {
        if self.raw_page_size == 0 {
            return Err(AppError::Config(
                "raw_page_size must be at least 1".to_string(),
            ));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// Write the default configuration file, keeping an existing one.
    pub fn init() -> AppResult<PathBuf> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(path);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Data directory with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Divider line printed between report blocks.
    pub fn separator(&self) -> String {
        self.separator_char.repeat(self.separator_width)
    }
}
