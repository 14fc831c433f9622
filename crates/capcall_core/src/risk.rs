//! Risk distribution sampler.
//!
//! Generates a fixed-size sample of simulated account values for each
//! capital call, feeding the ridge-style risk view. The generator is purely
//! illustrative, not calibrated to any real risk model. Its two contracts:
//! bit-identical output for a fixed seed, and a spread that grows across
//! call indices.

use jiff::civil::Date;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::config::ScenarioConfig;
use crate::model::RiskDistribution;
use crate::series::linspace;

/// Sample a per-call distribution of simulated account values.
///
/// For call index `i`, draws `risk_sample_size` standard normals scaled by
/// a factor rising linearly from 1.0 to 2.0 across the schedule, shifted by
/// a per-call offset of `i` plus a small uniform jitter scaled by 2. The
/// offset is drawn once per call and shared by all of that call's samples.
#[must_use]
pub fn sample_risk_distributions(
    config: &ScenarioConfig,
    dates: &[Date],
) -> Vec<RiskDistribution> {
    let total_calls = config.total_calls();
    let scales = linspace(1.0, 2.0, total_calls);
    let mut rng = SmallRng::seed_from_u64(config.seed);

    dates
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let offset = i as f64 + 2.0 * rng.random::<f64>();
            let scale = scales[i];
            let values = (0..config.risk_sample_size)
                .map(|_| {
                    let z: f64 = StandardNormal.sample(&mut rng);
                    scale * z + offset
                })
                .collect();
            RiskDistribution {
                call_index: i,
                call_number: i % config.calls_per_year + 1,
                date,
                values,
            }
        })
        .collect()
}
