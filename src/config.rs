use std::path::Path;

use crate::game::Player;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverConfig,
    pub game: GameConfig,
}

/// Where to reach the external position-evaluation service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Endpoint queried as `GET {url}?{query_param}={digits}`.
    pub url: String,
    /// Name of the position query parameter. The Rocket solver backend
    /// reads `pos`; its Next.js proxy reads `position`.
    pub query_param: String,
    pub timeout_secs: u64,
    /// When false, the evaluation display is unavailable entirely.
    pub enabled: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            solver: SolverConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            url: "http://localhost:8000/analyze".to_string(),
            query_param: "pos".to_string(),
            timeout_secs: 5,
            enabled: true,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::Red,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
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
        if self.solver.enabled && self.solver.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "solver.url must not be empty when solver.enabled is true".into(),
            ));
        }
        if self.solver.enabled && self.solver.query_param.trim().is_empty() {
            return Err(ConfigError::Validation(
                "solver.query_param must not be empty when solver.enabled is true".into(),
            ));
        }
        if self.solver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "solver.timeout_secs must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
