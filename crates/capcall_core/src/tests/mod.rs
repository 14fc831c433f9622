//! Integration tests for the capital-call scenario engine
//!
//! Tests are organized by topic:
//! - `schedule` - Call-date derivation across the slider range
//! - `curves` - Capital curve shape, smoothing, and the adjustment stage
//! - `risk` - Risk distribution sampler reproducibility and spread
//! - `forecast` - Monte Carlo forecast summary properties
//! - `scenario` - End-to-end runs over the full configuration

mod risk;
