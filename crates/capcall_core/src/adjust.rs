//! Adjustment stage.
//!
//! Applies the growth rate to the invested-capital series and accumulates
//! the distribution rate into a cumulative cash-flow series, then clamps
//! both to `[-100, 100]` percent of commitment.

use crate::config::ScenarioConfig;
use crate::model::{AdjustedCurvePoint, CapitalCurvePoint};
use crate::series::{clamp_series, cumulative_sum};

/// Derive the adjusted curve from the raw capital curve.
///
/// The cumulative series is the running sum of
/// `adjusted_invested * -1 * distribution_rate`, taken over the UNCLAMPED
/// adjusted invested values; both series are clamped only at the end.
/// Clamping per-term would change the cumulative shape.
#[must_use]
pub fn adjust_curve(
    config: &ScenarioConfig,
    curve: &[CapitalCurvePoint],
) -> Vec<AdjustedCurvePoint> {
    let raw_invested: Vec<f64> = curve
        .iter()
        .map(|p| p.invested_pct * (1.0 + config.investment_growth_rate))
        .collect();

    let raw_cash_flow: Vec<f64> = cumulative_sum(
        &raw_invested
            .iter()
            .map(|v| v * -1.0 * config.distribution_rate)
            .collect::<Vec<_>>(),
    );

    let invested = clamp_series(&raw_invested, -100.0, 100.0);
    let cash_flow = clamp_series(&raw_cash_flow, -100.0, 100.0);

    curve
        .iter()
        .zip(invested.iter().zip(cash_flow.iter()))
        .map(|(p, (&inv, &cf))| AdjustedCurvePoint {
            date: p.date,
            invested_pct: inv,
            cumulative_net_cash_flow_pct: cf,
        })
        .collect()
}
