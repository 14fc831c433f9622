//! Scenario orchestration.
//!
//! One synchronous pass: schedule → capital curve → adjusted curve, plus the
//! two stochastic stages (risk sampler and forecaster) which depend only on
//! the schedule and the configuration. Every invocation constructs entirely
//! fresh values.

use crate::adjust::adjust_curve;
use crate::config::ScenarioConfig;
use crate::curve::build_capital_curve;
use crate::error::Result;
use crate::forecast::forecast_account_values;
use crate::model::ScenarioResult;
use crate::risk::sample_risk_distributions;
use crate::schedule::build_call_schedule;

/// Compute all four chart-ready series for the given configuration.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioResult> {
    config.validate()?;

    let call_dates = build_call_schedule(config)?;
    let capital_curve = build_capital_curve(config, &call_dates);
    let adjusted_curve = adjust_curve(config, &capital_curve);
    let risk_distributions = sample_risk_distributions(config, &call_dates);
    let forecast = forecast_account_values(config)?;

    Ok(ScenarioResult {
        call_dates,
        capital_curve,
        adjusted_curve,
        risk_distributions,
        forecast,
    })
}
