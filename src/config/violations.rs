//! Configuration violations.

use thiserror::Error;

/// A single problem found while validating an [`EngineConfig`].
///
/// [`EngineConfig`]: crate::config::EngineConfig
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_length must be at least 1")]
    ZeroMaxLength,

    #[error("max_length ({value}) exceeds the supported maximum ({max})")]
    MaxLengthTooLarge { value: usize, max: usize },

    #[error("error_label must not be empty")]
    EmptyErrorLabel,

    #[error("error_label '{label}' could be typed on the keypad or read back as a number")]
    NumericErrorLabel { label: String },
}
