//! Configuration system for MatchForge.
//!
//! Load solver configuration from TOML or YAML to pick the display mode,
//! the number of sticks per move and the search limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use matchforge_config::{MoveCount, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     mode = "handwritten"
//!     move_count = 2
//!     max_mutations = 50000
//!
//!     [termination]
//!     millis_spent_limit = 250
//! "#).unwrap();
//!
//! assert_eq!(config.mode, "handwritten");
//! assert_eq!(config.move_count, MoveCount::Two);
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use matchforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("matchforge.toml").unwrap_or_default();
//! assert_eq!(config.max_mutations, 10_000);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    /// Registered display mode whose rules drive the search.
    pub mode: String,

    /// Sticks moved per solution.
    pub move_count: MoveCount,

    /// Cap on generated candidates, shared by all tokenization variants.
    pub max_mutations: usize,

    /// Tolerance when comparing both sides of an equation.
    pub epsilon: f64,

    /// Number of threads for parallel candidate evaluation.
    pub move_thread_count: MoveThreadCount,

    /// Termination configuration.
    pub termination: Option<TerminationConfig>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: "standard".to_string(),
            move_count: MoveCount::One,
            max_mutations: 10_000,
            epsilon: 1e-4,
            move_thread_count: MoveThreadCount::None,
            termination: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the display mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_move_count(mut self, move_count: MoveCount) -> Self {
        self.move_count = move_count;
        self
    }

    pub fn with_max_mutations(mut self, max_mutations: usize) -> Self {
        self.max_mutations = max_mutations;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the wall-clock limit, replacing any configured one.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: None,
            millis_spent_limit: Some(limit.as_millis() as u64),
        });
        self
    }

    pub fn with_move_thread_count(mut self, count: MoveThreadCount) -> Self {
        self.move_thread_count = count;
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Rejects values that deserialize but cannot drive a solve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode.is_empty() {
            return Err(ConfigError::Invalid("mode must not be empty".to_string()));
        }
        if self.max_mutations == 0 {
            return Err(ConfigError::Invalid(
                "max_mutations must be at least 1".to_string(),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        if self.move_thread_count == MoveThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "move_thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sticks moved per solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoveCount {
    #[default]
    One,
    Two,
}

impl MoveCount {
    pub fn get(self) -> u8 {
        u8::from(self)
    }
}

impl TryFrom<u8> for MoveCount {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MoveCount::One),
            2 => Ok(MoveCount::Two),
            other => Err(ConfigError::Invalid(format!(
                "move_count must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl From<MoveCount> for u8 {
    fn from(value: MoveCount) -> Self {
        match value {
            MoveCount::One => 1,
            MoveCount::Two => 2,
        }
    }
}

/// Move thread count configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveThreadCount {
    /// One thread per available core.
    Auto,

    /// No parallel evaluation.
    #[default]
    None,

    /// Specific number of threads.
    Count(usize),
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis =
            self.seconds_spent_limit.unwrap_or(0) * 1000 + self.millis_spent_limit.unwrap_or(0);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
