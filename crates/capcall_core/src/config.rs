//! Scenario configuration
//!
//! The engine takes everything it needs as one explicit, immutable
//! [`ScenarioConfig`] value. A dashboard front end typically exposes only
//! `calls_per_year` as a user control; the remaining fields carry the fixed
//! constants of the commitment schedule but are named configuration so
//! callers can vary them too.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

/// Complete configuration for one scenario computation pass.
///
/// A single `seed` drives both stochastic stages (risk sampler and Monte
/// Carlo forecaster) so a fixed configuration always reproduces the same
/// output bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Total committed capital, the 100% basis for every percentage series.
    pub commitment_amount: f64,
    /// Date of the first capital call.
    pub start_date: Date,
    /// Length of the commitment schedule in years.
    pub horizon_years: usize,
    /// Capital calls per year, expected in `[1, 12]`.
    pub calls_per_year: usize,
    /// Annual growth applied to the invested-capital series.
    pub investment_growth_rate: f64,
    /// Fraction of adjusted invested capital distributed per call.
    pub distribution_rate: f64,
    /// Number of independent Monte Carlo forecast paths.
    pub num_simulations: usize,
    /// Forecast length in monthly steps.
    pub forecast_horizon_months: usize,
    /// Mean of the monthly return distribution.
    pub monthly_return_mean: f64,
    /// Standard deviation of the monthly return distribution.
    pub monthly_return_std_dev: f64,
    /// Draws per capital call in the risk distribution view.
    pub risk_sample_size: usize,
    /// Seed shared by the risk sampler and the forecaster.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            commitment_amount: 20_000_000.0,
            start_date: jiff::civil::date(2024, 6, 30),
            horizon_years: 9,
            calls_per_year: 4,
            investment_growth_rate: 0.04,
            distribution_rate: 0.15,
            num_simulations: 1000,
            forecast_horizon_months: 36,
            monthly_return_mean: 0.005,
            monthly_return_std_dev: 0.02,
            risk_sample_size: 200,
            seed: 1,
        }
    }
}

impl ScenarioConfig {
    /// Total number of capital calls over the schedule.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.horizon_years * self.calls_per_year
    }

    /// Check every parameter that could break the numeric pipeline.
    ///
    /// `calls_per_year` and `horizon_years` below 1 would divide by zero in
    /// the date spacing and curve normalization, so they are rejected here
    /// rather than silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.calls_per_year < 1 {
            return Err(ScenarioError::InvalidParameter {
                field: "calls_per_year",
                value: self.calls_per_year as f64,
                reason: "must be at least 1",
            });
        }
        if self.horizon_years < 1 {
            return Err(ScenarioError::InvalidParameter {
                field: "horizon_years",
                value: self.horizon_years as f64,
                reason: "must be at least 1",
            });
        }
        if self.num_simulations < 1 {
            return Err(ScenarioError::InvalidParameter {
                field: "num_simulations",
                value: self.num_simulations as f64,
                reason: "must be at least 1",
            });
        }
        if self.forecast_horizon_months < 1 {
            return Err(ScenarioError::InvalidParameter {
                field: "forecast_horizon_months",
                value: self.forecast_horizon_months as f64,
                reason: "must be at least 1",
            });
        }
        if self.risk_sample_size < 1 {
            return Err(ScenarioError::InvalidParameter {
                field: "risk_sample_size",
                value: self.risk_sample_size as f64,
                reason: "must be at least 1",
            });
        }
        if !self.monthly_return_std_dev.is_finite() || self.monthly_return_std_dev < 0.0 {
            return Err(ScenarioError::InvalidParameter {
                field: "monthly_return_std_dev",
                value: self.monthly_return_std_dev,
                reason: "must be non-negative and finite",
            });
        }
        if !self.commitment_amount.is_finite() {
            return Err(ScenarioError::InvalidParameter {
                field: "commitment_amount",
                value: self.commitment_amount,
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScenarioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_calls(), 36);
    }

    #[test]
    fn test_rejects_zero_calls_per_year() {
        let config = ScenarioConfig {
            calls_per_year: 0,
            ..ScenarioConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidParameter {
                field: "calls_per_year",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let config = ScenarioConfig {
            horizon_years: 0,
            ..ScenarioConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_std_dev() {
        let config = ScenarioConfig {
            monthly_return_std_dev: -0.01,
            ..ScenarioConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ScenarioConfig {
            calls_per_year: 7,
            seed: 99,
            ..ScenarioConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
