//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_match_rfc_limits() {
    tracing::debug!("Testing default folding configuration");

    let settings = Settings::default();
    assert_eq!(settings.folding.max_line_octets, 75);
    assert_eq!(settings.folding.line_ending, LineEnding::Crlf);
    assert_eq!(settings.logging.level, "info");
    assert!(settings.folding.validate().is_ok());
}

#[test]
fn test_line_ending_as_str() {
    assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    assert_eq!(LineEnding::Lf.as_str(), "\n");
}

#[test]
fn test_from_toml_empty_uses_defaults() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings.folding, FoldingConfig::default());
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_from_toml_overrides() {
    let settings = Settings::from_toml_str(
        r#"
[folding]
max_line_octets = 40
line_ending = "lf"

[logging]
level = "trace"
"#,
    )
    .unwrap();

    assert_eq!(settings.folding.max_line_octets, 40);
    assert_eq!(settings.folding.line_ending, LineEnding::Lf);
    assert_eq!(settings.logging.level, "trace");
}

#[test]
fn test_from_toml_rejects_tiny_limit() {
    let result = Settings::from_toml_str("[folding]\nmax_line_octets = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_validate_bounds() {
    let mut config = FoldingConfig::default();

    config.max_line_octets = 2;
    assert!(config.validate().is_ok());

    config.max_line_octets = 998;
    assert!(config.validate().is_ok());

    config.max_line_octets = 999;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("999"));
}

#[test]
fn test_unknown_line_ending_is_rejected() {
    let result = Settings::from_toml_str("[folding]\nline_ending = \"cr\"\n");
    assert!(result.is_err());
}

fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[test_log::test]
fn test_load_with_env_overrides() {
    let settings = Settings::load_with_env(Some(env(&[
        ("VCARDLINE_FOLDING__MAX_LINE_OCTETS", "40"),
        ("VCARDLINE_FOLDING__LINE_ENDING", "lf"),
        ("VCARDLINE_LOGGING__LEVEL", "debug"),
    ])))
    .unwrap();

    assert_eq!(settings.folding.max_line_octets, 40);
    assert_eq!(settings.folding.line_ending, LineEnding::Lf);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_load_with_empty_env_uses_defaults() {
    let settings = Settings::load_with_env(Some(env(&[]))).unwrap();
    assert_eq!(settings.folding.max_line_octets, 75);
    assert_eq!(settings.folding.line_ending, LineEnding::Crlf);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_load_with_env_ignores_other_prefixes() {
    let settings = Settings::load_with_env(Some(env(&[
        ("OTHER_FOLDING__MAX_LINE_OCTETS", "40"),
        ("VCARDLINE_FOLDING__MAX_LINE_OCTETS", ""),
    ])))
    .unwrap();
    assert_eq!(settings.folding.max_line_octets, 75);
}

#[test]
fn test_load_with_env_rejects_out_of_range_limit() {
    let result = Settings::load_with_env(Some(env(&[(
        "VCARDLINE_FOLDING__MAX_LINE_OCTETS",
        "1",
    )])));
    assert!(result.is_err());
}

#[test_log::test]
fn test_load_config_produces_valid_settings() {
    let settings = load_config().unwrap();
    assert!(settings.folding.validate().is_ok());
}
