//! Capital-call scenario engine
//!
//! This crate synthesizes illustrative capital-call schedules, invested-capital
//! and cumulative cash-flow curves, per-call risk distributions, and Monte
//! Carlo account-value forecasts for a private-equity-style commitment.
//! It produces plain numeric tables with named fields for a rendering layer
//! to chart; there is no charting, ingestion, or persistence here.
//!
//! Every run is a single synchronous pass over an immutable
//! [`ScenarioConfig`]; the engine holds no process-wide state, and both
//! stochastic stages (risk sampler and forecaster) draw from the same
//! explicit seed so repeated runs are reproducible.
//!
//! ```ignore
//! use capcall_core::{ScenarioConfig, run_scenario};
//!
//! let config = ScenarioConfig {
//!     calls_per_year: 4,
//!     ..ScenarioConfig::default()
//! };
//! let result = run_scenario(&config)?;
//! println!("{} capital calls", result.call_dates.len());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod adjust;
pub mod config;
pub mod curve;
pub mod error;
pub mod forecast;
pub mod risk;
pub mod scenario;
pub mod schedule;
pub mod series;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ScenarioConfig;
pub use error::{Result, ScenarioError};
pub use model::{
    AdjustedCurvePoint, CapitalCurvePoint, ForecastPoint, RiskDistribution, ScenarioResult,
};
pub use scenario::run_scenario;
