//! Chart-ready output tables.
//!
//! Everything here is a plain value struct with named fields, serializable
//! without reference to any charting library. Each run of the engine
//! constructs fresh values; nothing is mutated after construction.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One row of the capital deployment curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalCurvePoint {
    pub date: Date,
    /// Invested capital as a percent of commitment. Unclamped at this
    /// stage: the wind-down segment may dip below zero before the
    /// adjustment stage clamps its derived series.
    pub invested_pct: f64,
    /// Invested capital in currency, `invested_pct / 100 * commitment`.
    pub invested_amount: f64,
    /// Smoothed cumulative net cash flow as a percent of commitment
    /// (the J-curve: outflow first, recovery later).
    pub cumulative_net_cash_flow_pct: f64,
}

/// One row of the growth/distribution-adjusted curve, clamped to
/// `[-100, 100]` percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCurvePoint {
    pub date: Date,
    pub invested_pct: f64,
    pub cumulative_net_cash_flow_pct: f64,
}

/// Simulated account-value sample for one capital call, used for the
/// ridge-style risk view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    /// Zero-based index into the call schedule.
    pub call_index: usize,
    /// One-based call number within its year ("Jun 2024 Call #1").
    pub call_number: usize,
    pub date: Date,
    /// Independent draws from the call's simulated account-value process.
    pub values: Vec<f64>,
}

/// One monthly step of the Monte Carlo forecast summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: Date,
    /// Mean account value across all simulated paths.
    pub mean: f64,
    /// 2.5th percentile across paths.
    pub lower_bound: f64,
    /// 97.5th percentile across paths.
    pub upper_bound: f64,
}

/// The four chart-ready series produced by one scenario pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub call_dates: Vec<Date>,
    pub capital_curve: Vec<CapitalCurvePoint>,
    pub adjusted_curve: Vec<AdjustedCurvePoint>,
    pub risk_distributions: Vec<RiskDistribution>,
    pub forecast: Vec<ForecastPoint>,
}
