//! Engine configuration.
//!
//! `EngineConfig` carries the few tunables of the calculator engine: the
//! operand length cap, how a leading decimal point is entered, how
//! non-finite results are displayed, and how many dispatches a session
//! remembers.
//!
//! Validation uses Stillwater's `Validation` type so that every problem in
//! a configuration is reported at once rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use tally::config::{EngineConfig, NonFinitePolicy};
//!
//! let config = EngineConfig::from_json(r#"{ "max_length": 12, "non_finite": "Passthrough" }"#)
//!     .unwrap();
//!
//! assert_eq!(config.max_length, 12);
//! assert_eq!(config.non_finite, NonFinitePolicy::Passthrough);
//! assert_eq!(config.error_label, "Error");
//! ```

pub mod builder;
pub mod error;
pub mod violations;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use violations::ConfigViolation;

use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default cap on characters typed into one operand buffer
pub const DEFAULT_MAX_LENGTH: usize = 8;

/// Largest operand cap accepted by validation
pub const MAX_SUPPORTED_LENGTH: usize = 64;

/// Default label shown in place of a non-finite result
pub const DEFAULT_ERROR_LABEL: &str = "Error";

/// How a decimal point pressed on an empty buffer is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadingDecimal {
    /// Append a bare `"."`.
    #[default]
    Literal,
    /// Append `"0."`.
    ZeroPrefix,
}

/// How infinite and NaN results are written to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonFinitePolicy {
    /// Replace the result with the configured error label.
    #[default]
    ErrorLabel,
    /// Write `Infinity`, `-Infinity` or `NaN`.
    Passthrough,
}

/// Tunables for the calculator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum characters typed into each operand buffer
    pub max_length: usize,
    /// Decimal point handling on an empty buffer
    pub leading_decimal: LeadingDecimal,
    /// Display policy for division by zero and other non-finite results
    pub non_finite: NonFinitePolicy,
    /// Marker written under [`NonFinitePolicy::ErrorLabel`]
    pub error_label: String,
    /// Number of dispatches a session keeps in its log
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            leading_decimal: LeadingDecimal::default(),
            non_finite: NonFinitePolicy::default(),
            error_label: DEFAULT_ERROR_LABEL.to_string(),
            history_limit: crate::core::DispatchLog::DEFAULT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let length_check = if self.max_length == 0 {
            Validation::fail(ConfigViolation::ZeroMaxLength)
        } else if self.max_length > MAX_SUPPORTED_LENGTH {
            Validation::fail(ConfigViolation::MaxLengthTooLarge {
                value: self.max_length,
                max: MAX_SUPPORTED_LENGTH,
            })
        } else {
            Validation::success(())
        };
        checks.push(length_check);

        let label = self.error_label.trim();
        let label_check = if label.is_empty() {
            Validation::fail(ConfigViolation::EmptyErrorLabel)
        } else if label.parse::<f64>().is_ok() || is_typeable(label) {
            Validation::fail(ConfigViolation::NumericErrorLabel {
                label: self.error_label.clone(),
            })
        } else {
            Validation::success(())
        };
        checks.push(label_check);

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand back the configuration, or every violation found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

/// True when keypad input alone can produce `label`.
fn is_typeable(label: &str) -> bool {
    label.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}
