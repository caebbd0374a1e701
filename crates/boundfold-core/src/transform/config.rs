//! Configuration for the bound folding pass.

use crate::transform::error::TransformError;

/// Coefficients closer to zero than this carry no usable bound.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-8;

/// Options controlling [`ConstraintToVarBound`](super::ConstraintToVarBound).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldConfig {
    /// Absolute tolerance below which a coefficient counts as zero.
    pub zero_tolerance: f64,
    /// Visit constraints in nested blocks, not only the root block.
    pub descend_into: bool,
}

impl FoldConfig {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero tolerance for coefficients.
    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Enable or disable descent into nested blocks.
    pub fn with_descend_into(mut self, enabled: bool) -> Self {
        self.descend_into = enabled;
        self
    }

    /// Check that the tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !self.zero_tolerance.is_finite() || self.zero_tolerance < 0.0 {
            return Err(TransformError::InvalidTolerance {
                tolerance: self.zero_tolerance,
            });
        }
        Ok(())
    }
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            descend_into: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FoldConfig::new();
        assert_eq!(config.zero_tolerance, 1e-8);
        assert!(config.descend_into);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = FoldConfig::new()
            .with_zero_tolerance(1e-6)
            .with_descend_into(false);
        assert_eq!(config.zero_tolerance, 1e-6);
        assert!(!config.descend_into);
    }

    #[test]
    fn test_config_rejects_bad_tolerance() {
        for tolerance in [-1e-9, f64::NAN, f64::INFINITY] {
            let config = FoldConfig::new().with_zero_tolerance(tolerance);
            assert!(matches!(
                config.validate(),
                Err(TransformError::InvalidTolerance { .. })
            ));
        }
    }
}
