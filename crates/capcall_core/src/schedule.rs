//! Capital-call schedule builder.
//!
//! Derives the ordered sequence of call dates from the configuration:
//! `horizon_years * calls_per_year` calls, spaced at `floor(365 /
//! calls_per_year)`-day intervals from the start date.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::config::ScenarioConfig;
use crate::error::Result;

/// Build the ordered, strictly increasing capital-call date sequence.
///
/// `date[i] = start_date + floor(i * 365 / calls_per_year)` days, so the
/// first call lands exactly on the start date. Assumes a validated config
/// (`calls_per_year >= 1`).
pub fn build_call_schedule(config: &ScenarioConfig) -> Result<Vec<Date>> {
    let total_calls = config.total_calls();
    let mut dates = Vec::with_capacity(total_calls);
    for i in 0..total_calls {
        let offset_days = (i * 365 / config.calls_per_year) as i64;
        dates.push(config.start_date.checked_add(offset_days.days())?);
    }
    Ok(dates)
}
