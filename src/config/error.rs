//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Timeout value could not be parsed as a number of seconds.
    #[error("failed to parse {var} value '{value}' as seconds: {source}")]
    TimeoutParseError {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Flag value was neither `true` nor `false`.
    #[error("failed to parse {var} value '{value}' as a boolean: {source}")]
    FlagParseError {
        var: &'static str,
        value: String,
        #[source]
        source: std::str::ParseBoolError,
    },

    /// Model name was set but empty.
    #[error("{var} is set but empty")]
    EmptyModelName { var: &'static str },
}
