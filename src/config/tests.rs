use super::*;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_gistmark_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("GISTMARK_MODEL");
        env::remove_var("GISTMARK_TIMEOUT_SECS");
        env::remove_var("GISTMARK_MODEL_ENABLED");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_gistmark_env();
    let config = Config::default();

    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.request_timeout.is_none());
    assert!(config.model_enabled);
}

#[test]
#[serial]
fn test_from_env_with_no_overrides_matches_defaults() {
    clear_gistmark_env();
    let config = Config::from_env().expect("defaults load");

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_gistmark_env();
    let config = with_env_vars(
        &[
            ("GISTMARK_MODEL", "gemini-2.5-flash"),
            ("GISTMARK_TIMEOUT_SECS", "20"),
            ("GISTMARK_MODEL_ENABLED", "false"),
        ],
        || Config::from_env().expect("overrides load"),
    );

    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(20)));
    assert!(!config.model_enabled);
}

#[test]
#[serial]
fn test_zero_timeout_means_no_timeout() {
    clear_gistmark_env();
    let config = with_env_vars(&[("GISTMARK_TIMEOUT_SECS", "0")], || {
        Config::from_env().expect("zero timeout loads")
    });

    assert!(config.request_timeout.is_none());
}

#[test]
#[serial]
fn test_invalid_timeout_is_an_error() {
    clear_gistmark_env();
    let error = with_env_vars(&[("GISTMARK_TIMEOUT_SECS", "soon")], || {
        Config::from_env().expect_err("unparsable timeout")
    });

    assert!(matches!(error, ConfigError::TimeoutParseError { .. }));
}

#[test]
#[serial]
fn test_invalid_flag_is_an_error() {
    clear_gistmark_env();
    let error = with_env_vars(&[("GISTMARK_MODEL_ENABLED", "maybe")], || {
        Config::from_env().expect_err("unparsable flag")
    });

    assert!(matches!(error, ConfigError::FlagParseError { .. }));
}

#[test]
#[serial]
fn test_empty_model_name_is_an_error() {
    clear_gistmark_env();
    let error = with_env_vars(&[("GISTMARK_MODEL", "  ")], || {
        Config::from_env().expect_err("empty model name")
    });

    assert!(matches!(error, ConfigError::EmptyModelName { .. }));
}
