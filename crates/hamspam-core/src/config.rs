use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Default minimum token frequency for the vocabulary.
pub const DEFAULT_MIN_FREQUENCY: usize = 1;
/// Default additive smoothing constant.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Hyperparameters for building and training a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Tokens seen fewer times than this in the training file are not attributes.
    pub min_frequency: usize,
    /// Additive smoothing constant `k`. Must be finite and positive.
    pub smoothing: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum token frequency `m`.
    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Set the smoothing constant `k`.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Checks every value is in range.
    pub fn validate(&self) -> Result<()> {
        check_smoothing(self.smoothing)
    }
}

pub(crate) fn check_smoothing(smoothing: f64) -> Result<()> {
    if smoothing.is_finite() && smoothing > 0.0 {
        Ok(())
    } else {
        Err(ClassifierError::InvalidConfig(format!(
            "smoothing must be a positive finite number, got {smoothing}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert_eq!(config.min_frequency, 1);
        assert_eq!(config.smoothing, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = ClassifierConfig::new()
            .with_min_frequency(2)
            .with_smoothing(0.05);
        assert_eq!(config.min_frequency, 2);
        assert_eq!(config.smoothing, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_smoothing_rejected() {
        for k in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ClassifierConfig::new().with_smoothing(k).validate().unwrap_err();
            assert!(matches!(err, ClassifierError::InvalidConfig(_)), "k={k}");
        }
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = ClassifierConfig::new().with_smoothing(0.1);
        let json = serde_json::to_string(&config).unwrap();
        let back: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
