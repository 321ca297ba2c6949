//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `GISTMARK_*` environment
//! variables. Provider credentials (e.g. `GEMINI_API_KEY`) are resolved by
//! the `genai` client itself and are not part of this config.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::time::Duration;

/// Default model when `GISTMARK_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemma-3n-e4b-it";

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GISTMARK_*` overrides on top of
/// defaults, then [`Evaluator::from_config`](crate::eval::Evaluator::from_config)
/// to wire the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chat model name handed to the provider client. Default:
    /// [`DEFAULT_MODEL`].
    pub model: String,

    /// Deadline applied to each model call. `None` (the default) means the
    /// pipeline imposes no timeout of its own.
    pub request_timeout: Option<Duration>,

    /// Whether a model invoker is wired at all. When `false` every
    /// evaluation takes the lexical-overlap path. Default: `true`.
    pub model_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            request_timeout: None,
            model_enabled: true,
        }
    }
}

impl Config {
    const ENV_MODEL: &'static str = "GISTMARK_MODEL";
    const ENV_TIMEOUT_SECS: &'static str = "GISTMARK_TIMEOUT_SECS";
    const ENV_MODEL_ENABLED: &'static str = "GISTMARK_MODEL_ENABLED";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            model: Self::parse_model_from_env(defaults.model)?,
            request_timeout: Self::parse_timeout_from_env()?,
            model_enabled: Self::parse_enabled_from_env(defaults.model_enabled)?,
        })
    }

    fn parse_model_from_env(default: String) -> Result<String, ConfigError> {
        match env::var(Self::ENV_MODEL) {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::EmptyModelName {
                        var: Self::ENV_MODEL,
                    });
                }
                Ok(value)
            }
            Err(_) => Ok(default),
        }
    }

    /// `0` disables the timeout, same as leaving the variable unset.
    fn parse_timeout_from_env() -> Result<Option<Duration>, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_SECS) {
            Ok(value) => {
                let seconds: u64 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::TimeoutParseError {
                            var: Self::ENV_TIMEOUT_SECS,
                            value: value.clone(),
                            source: e,
                        })?;

                Ok((seconds > 0).then(|| Duration::from_secs(seconds)))
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_enabled_from_env(default: bool) -> Result<bool, ConfigError> {
        match env::var(Self::ENV_MODEL_ENABLED) {
            Ok(value) => value.parse().map_err(|e| ConfigError::FlagParseError {
                var: Self::ENV_MODEL_ENABLED,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
