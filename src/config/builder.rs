//! Builder API for engine configuration.

use crate::config::{ConfigError, EngineConfig, LeadingDecimal, NonFinitePolicy};

/// Fluent builder over [`EngineConfig`], starting from the defaults.
///
/// # Example
///
/// ```rust
/// use tally::config::{ConfigBuilder, LeadingDecimal};
///
/// let config = ConfigBuilder::new()
///     .max_length(12)
///     .leading_decimal(LeadingDecimal::ZeroPrefix)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_length, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: EngineConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-operand character cap
    pub fn max_length(mut self, n: usize) -> Self {
        self.config.max_length = n;
        self
    }

    /// Set how a decimal point on an empty buffer is entered
    pub fn leading_decimal(mut self, policy: LeadingDecimal) -> Self {
        self.config.leading_decimal = policy;
        self
    }

    /// Set how non-finite results are displayed
    pub fn non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.config.non_finite = policy;
        self
    }

    /// Set the marker used for non-finite results
    pub fn error_label(mut self, label: impl Into<String>) -> Self {
        self.config.error_label = label.into();
        self
    }

    /// Set how many dispatches a session keeps
    pub fn history_limit(mut self, n: usize) -> Self {
        self.config.history_limit = n;
        self
    }

    /// Build the configuration.
    /// Returns every validation violation if any rule fails.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;

    #[test]
    fn builder_starts_from_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn fluent_api_sets_every_field() {
        let config = EngineConfig::builder()
            .max_length(4)
            .leading_decimal(LeadingDecimal::ZeroPrefix)
            .non_finite(NonFinitePolicy::Passthrough)
            .error_label("Err")
            .history_limit(5)
            .build()
            .unwrap();

        assert_eq!(config.max_length, 4);
        assert_eq!(config.leading_decimal, LeadingDecimal::ZeroPrefix);
        assert_eq!(config.non_finite, NonFinitePolicy::Passthrough);
        assert_eq!(config.error_label, "Err");
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn builder_validates_fields() {
        let result = ConfigBuilder::new().max_length(0).error_label("").build();

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        ConfigViolation::ZeroMaxLength,
                        ConfigViolation::EmptyErrorLabel
                    ]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }
}
