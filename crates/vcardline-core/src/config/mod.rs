use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CRLF, LF, MAX_CONFIGURABLE_LINE_OCTETS, MAX_LINE_OCTETS};
use crate::error::{CoreError, CoreResult};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub folding: FoldingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Physical line terminator emitted by the writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => CRLF,
            Self::Lf => LF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FoldingConfig {
    #[serde(default = "default_max_line_octets")]
    pub max_line_octets: usize,
    #[serde(default)]
    pub line_ending: LineEnding,
}

const fn default_max_line_octets() -> usize {
    MAX_LINE_OCTETS
}

impl Default for FoldingConfig {
    fn default() -> Self {
        Self {
            max_line_octets: MAX_LINE_OCTETS,
            line_ending: LineEnding::Crlf,
        }
    }
}

impl FoldingConfig {
    /// ## Summary
    /// Checks that the line limit leaves room for a continuation space plus
    /// at least one octet, and stays within the RFC 5322 line bound.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` when `max_line_octets` is out of range.
    pub fn validate(&self) -> CoreResult<()> {
        if (2..=MAX_CONFIGURABLE_LINE_OCTETS).contains(&self.max_line_octets) {
            Ok(())
        } else {
            Err(CoreError::InvalidConfiguration(format!(
                "folding.max_line_octets must be between 2 and {MAX_CONFIGURABLE_LINE_OCTETS}, got {}",
                self.max_line_octets
            )))
        }
    }
}

/// Logging settings for the host application.
///
/// The libraries never install a subscriber; `level` is an `EnvFilter`
/// directive (for example `info` or `vcardline_rfc=trace`) for the host to
/// apply when it sets up `tracing-subscriber`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `VCARDLINE_*` environment variables and an
    /// optional `vcardline.toml`. Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        Self::load_with_env(None)
    }

    /// ## Summary
    /// Like [`Settings::load`], reading `VCARDLINE_*` variables from `env`
    /// instead of the process environment when it is `Some`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load_with_env(env: Option<config::Map<String, String>>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("folding.max_line_octets", 75)?
            .set_default("folding.line_ending", "crlf")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("vcardline.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("VCARDLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.folding.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Parses settings from a TOML document, filling unspecified keys with defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML, does not match the
    /// settings schema, or fails validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.folding.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        max_line_octets = settings.folding.max_line_octets,
        line_ending = ?settings.folding.line_ending,
        "Loaded vcardline settings"
    );
    Ok(settings)
}
