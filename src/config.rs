//! Skill configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_noughts::{DEFAULT_MEDIUM_THRESHOLD, Handler, Mark, MoveEngine, SessionState};
use tracing::{debug, info, instrument};

/// Tunables for the game handler.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SkillConfig {
    /// Medium tier plays randomly when a 0-100 roll exceeds this.
    #[serde(default = "default_threshold")]
    medium_random_threshold: u32,

    /// Mark given to the person playing.
    #[serde(default = "default_player_mark")]
    player_mark: Mark,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_threshold() -> u32 {
    DEFAULT_MEDIUM_THRESHOLD
}

#[instrument]
fn default_player_mark() -> Mark {
    Mark::X
}

impl SkillConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            threshold = config.medium_random_threshold,
            player = %config.player_mark,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.medium_random_threshold > 100 {
            return Err(ConfigError::new(format!(
                "medium_random_threshold must be 0-100, got {}",
                config.medium_random_threshold
            )));
        }
        Ok(config)
    }

    /// Loads the file when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Move engine for these settings.
    pub fn engine(&self) -> MoveEngine {
        MoveEngine::new(self.medium_random_threshold)
    }

    /// Fresh session state for these settings.
    pub fn new_session(&self) -> SessionState {
        SessionState::for_player(self.player_mark)
    }

    /// Handler seeded from `seed`, or from OS entropy when unset.
    #[instrument(skip(self))]
    pub fn handler(&self) -> Handler<StdRng> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Handler::with_engine(self.engine(), rng)
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            medium_random_threshold: default_threshold(),
            player_mark: default_player_mark(),
            seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
