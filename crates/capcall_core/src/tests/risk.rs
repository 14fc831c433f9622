//! Tests for the risk distribution sampler
//!
//! These tests verify that:
//! - A fixed seed reproduces bit-identical sample sets
//! - Different seeds produce different samples
//! - The spread of the per-call distributions grows across the schedule
//! - Call numbering and sample sizes match the configuration

use crate::config::ScenarioConfig;
use crate::risk::sample_risk_distributions;
use crate::schedule::build_call_schedule;
use crate::series::mean;

fn sample_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

#[test]
fn test_fixed_seed_reproducibility() {
    let config = ScenarioConfig::default();
    let dates = build_call_schedule(&config).unwrap();

    let a = sample_risk_distributions(&config, &dates);
    let b = sample_risk_distributions(&config, &dates);
    assert_eq!(a, b, "same seed must reproduce bit-identical samples");
}

#[test]
fn test_different_seeds_differ() {
    let config = ScenarioConfig::default();
    let dates = build_call_schedule(&config).unwrap();

    let a = sample_risk_distributions(&config, &dates);
    let other = ScenarioConfig {
        seed: 2,
        ..config.clone()
    };
    let b = sample_risk_distributions(&other, &dates);
    assert_ne!(a[0].values, b[0].values);
}

#[test]
fn test_sample_sizes_and_call_numbers() {
    let config = ScenarioConfig {
        calls_per_year: 4,
        ..ScenarioConfig::default()
    };
    let dates = build_call_schedule(&config).unwrap();
    let distributions = sample_risk_distributions(&config, &dates);

    assert_eq!(distributions.len(), 36);
    for (i, dist) in distributions.iter().enumerate() {
        assert_eq!(dist.call_index, i);
        assert_eq!(dist.call_number, i % 4 + 1);
        assert_eq!(dist.date, dates[i]);
        assert_eq!(dist.values.len(), config.risk_sample_size);
    }
}

#[test]
fn test_spread_grows_across_calls() {
    let config = ScenarioConfig::default();
    let dates = build_call_schedule(&config).unwrap();
    let distributions = sample_risk_distributions(&config, &dates);

    // Scale rises from 1.0 to 2.0 across the schedule; with 200 draws the
    // doubling dominates sampling noise
    let first = sample_std_dev(&distributions[0].values);
    let last = sample_std_dev(&distributions[35].values);
    assert!(
        last > first * 1.5,
        "spread should roughly double: first={first:.3}, last={last:.3}"
    );
}

#[test]
fn test_offsets_track_call_index() {
    let config = ScenarioConfig::default();
    let dates = build_call_schedule(&config).unwrap();
    let distributions = sample_risk_distributions(&config, &dates);

    // The per-call offset is i plus jitter in [0, 2), so sample means climb
    // with the call index
    let early = mean(&distributions[0].values);
    let late = mean(&distributions[35].values);
    assert!(
        late > early + 25.0,
        "means should track call index: early={early:.2}, late={late:.2}"
    );
}
