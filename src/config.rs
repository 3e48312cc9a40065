use std::path::Path;

use crate::error::ConfigError;

/// Board dimensions and win length, fixed for the lifetime of an engine
/// instance and passed explicitly into constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub win: usize,
}

impl Default for EngineConfig {
    /// The classic 6x7 board with four in a row to win.
    fn default() -> Self {
        EngineConfig {
            rows: 6,
            cols: 7,
            win: 4,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("cols must be > 0".into()));
        }
        if self.win == 0 {
            return Err(ConfigError::Validation("win must be > 0".into()));
        }
        if self.win > self.rows.min(self.cols) {
            return Err(ConfigError::Validation(
                "win must be at most min(rows, cols)".into(),
            ));
        }
        Ok(())
    }

    /// Total number of cells on the board.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
