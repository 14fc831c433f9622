//! Capital curve generator.
//!
//! Produces the invested-capital percentage curve (a three-segment
//! piecewise-linear deployment shape) and the smoothed cumulative
//! net-cash-flow percentage curve (two linear ramps forming a J-curve,
//! softened with a centered moving average).

use jiff::civil::Date;

use crate::config::ScenarioConfig;
use crate::model::CapitalCurvePoint;
use crate::series::{linspace, rolling_mean3};

/// End of the rapid-deployment ramp, in years.
const RAMP_UP_END_YEARS: f64 = 3.0;
/// End of the plateau segment, in years.
const PLATEAU_END_YEARS: f64 = 7.0;

/// Invested capital as a percent of commitment at normalized time `x`
/// (years since the first call).
///
/// Three linear segments: rapid deployment to 60% over the first three
/// years, a slow climb to 80% through year seven, then a 20%/year
/// wind-down. Continuous at both breakpoints by construction. The
/// wind-down segment is not clamped here; the `[-100, 100]` clamp
/// belongs to the adjustment stage, which must see the raw values.
#[must_use]
pub fn invested_pct(x: f64) -> f64 {
    if x < RAMP_UP_END_YEARS {
        20.0 * x
    } else if x < PLATEAU_END_YEARS {
        60.0 + 5.0 * (x - RAMP_UP_END_YEARS)
    } else {
        80.0 - 20.0 * (x - PLATEAU_END_YEARS)
    }
}

/// Unsmoothed cumulative net cash flow ramp: 0% down to -60% over the
/// first half of the calls, then -60% up to +100% over the rest.
#[must_use]
pub fn cash_flow_ramp(total_calls: usize) -> Vec<f64> {
    let first_half = total_calls / 2;
    let mut ramp = linspace(0.0, -60.0, first_half);
    ramp.extend(linspace(-60.0, 100.0, total_calls - first_half));
    ramp
}

/// Build the capital curve table over the call schedule.
///
/// Call indices are normalized to continuous time over
/// `[0, horizon_years]` with `total_calls` evenly spaced points. The
/// cash-flow ramp is smoothed with a centered window-3 moving average,
/// edges filled from the nearest centered value.
#[must_use]
pub fn build_capital_curve(config: &ScenarioConfig, dates: &[Date]) -> Vec<CapitalCurvePoint> {
    let total_calls = config.total_calls();
    let xs = linspace(0.0, config.horizon_years as f64, total_calls);
    let cash_flow = rolling_mean3(&cash_flow_ramp(total_calls));

    dates
        .iter()
        .zip(xs.iter().zip(cash_flow.iter()))
        .map(|(&date, (&x, &cf))| {
            let pct = invested_pct(x);
            CapitalCurvePoint {
                date,
                invested_pct: pct,
                invested_amount: pct / 100.0 * config.commitment_amount,
                cumulative_net_cash_flow_pct: cf,
            }
        })
        .collect()
}
