//! Tunable scoring parameters.

use crate::error::MatchError;

/// Assumed billable hours in one month of full-time work.
pub const DEFAULT_HOURS_PER_MONTH: f64 = 160.0;

/// Parameters for both scoring strategies.
///
/// The defaults reproduce the production weights. Only `hours_per_month` is
/// exposed through server configuration today.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Divisor turning a project budget ceiling into an hourly budget.
    pub hours_per_month: f64,
    /// Weight of required-skill overlap in the company base score.
    pub company_overlap_weight: f64,
    /// Weight of the company's own skill coverage in the base score.
    pub company_coverage_weight: f64,
    /// Multiplier applied when a company has spare project capacity.
    pub capacity_boost: f64,
    /// Multiplier applied when a company's team is larger than `team_boost_min_size`.
    pub team_boost: f64,
    pub team_boost_min_size: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            hours_per_month: DEFAULT_HOURS_PER_MONTH,
            company_overlap_weight: 70.0,
            company_coverage_weight: 30.0,
            capacity_boost: 1.1,
            team_boost: 1.05,
            team_boost_min_size: 5,
        }
    }
}

impl MatchingConfig {
    pub fn with_hours_per_month(hours_per_month: f64) -> Self {
        Self {
            hours_per_month,
            ..Self::default()
        }
    }

    /// Reject configurations that would make scores meaningless.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.hours_per_month.is_finite() || self.hours_per_month <= 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "hours_per_month must be positive, got {}",
                self.hours_per_month
            )));
        }
        let weights = [
            ("company_overlap_weight", self.company_overlap_weight),
            ("company_coverage_weight", self.company_coverage_weight),
            ("capacity_boost", self.capacity_boost),
            ("team_boost", self.team_boost),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MatchingConfig::default().validate().is_ok());
    }

    #[test]
    fn company_weights_sum_to_one_hundred() {
        let config = MatchingConfig::default();
        let sum = config.company_overlap_weight + config.company_coverage_weight;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_hours_rejected() {
        let err = MatchingConfig::with_hours_per_month(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidConfig(msg) if msg.contains("hours_per_month")));
    }

    #[test]
    fn negative_weight_rejected() {
        let config = MatchingConfig {
            company_overlap_weight: -1.0,
            ..MatchingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn nan_boost_rejected() {
        let config = MatchingConfig {
            team_boost: f64::NAN,
            ..MatchingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
