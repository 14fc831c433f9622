//! Numeric pipeline helpers for ordered series of `f64` values.
//!
//! The curve, adjustment, and forecast stages are all expressed as explicit
//! transforms over `Vec<f64>`: evenly spaced grids, centered moving
//! averages, running sums, clamps, and interpolated percentiles. No array
//! library, just the documented formulas.

/// Evenly spaced values from `start` to `stop` inclusive.
///
/// `n == 1` yields `[start]`, matching the convention that a single sample
/// sits at the start of the range.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Centered moving average with window 3, edges filled from the nearest
/// centered value.
///
/// The first and last element have no centered window; they copy the
/// adjacent computed average (backward-fill then forward-fill). Series
/// shorter than 3 points have no centered window at all and are returned
/// unchanged.
#[must_use]
pub fn rolling_mean3(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 3 {
        return values.to_vec();
    }

    let mut smoothed = Vec::with_capacity(n);
    smoothed.push(0.0); // placeholder, back-filled below
    for i in 1..n - 1 {
        smoothed.push((values[i - 1] + values[i] + values[i + 1]) / 3.0);
    }
    smoothed[0] = smoothed[1];
    smoothed.push(smoothed[n - 2]);
    smoothed
}

/// Running cumulative sum.
#[must_use]
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|v| {
            total += v;
            total
        })
        .collect()
}

/// Clamp every element to `[lo, hi]`.
#[must_use]
pub fn clamp_series(values: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    values.iter().map(|v| v.clamp(lo, hi)).collect()
}

/// Arithmetic mean. Empty input yields 0.0.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Percentile of a **sorted** slice using linear interpolation between
/// sample points, with `p` in `[0, 100]`.
#[must_use]
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 9.0, 10);
        assert_eq!(v.len(), 10);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[9], 9.0);
        assert!((v[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let v = linspace(0.0, -60.0, 4);
        assert_eq!(v[0], 0.0);
        assert!((v[1] + 20.0).abs() < 1e-12);
        assert!((v[3] + 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_rolling_mean3_interior() {
        let v = rolling_mean3(&[0.0, 3.0, 6.0, 9.0, 12.0]);
        assert!((v[1] - 3.0).abs() < 1e-12);
        assert!((v[2] - 6.0).abs() < 1e-12);
        assert!((v[3] - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_rolling_mean3_edge_fill() {
        let v = rolling_mean3(&[0.0, 3.0, 6.0, 9.0, 12.0]);
        // Edges copy the nearest centered average
        assert_eq!(v[0], v[1]);
        assert_eq!(v[4], v[3]);
    }

    #[test]
    fn test_rolling_mean3_short_series_unchanged() {
        assert_eq!(rolling_mean3(&[1.0, 2.0]), vec![1.0, 2.0]);
        assert_eq!(rolling_mean3(&[7.0]), vec![7.0]);
    }

    #[test]
    fn test_cumulative_sum() {
        let v = cumulative_sum(&[1.0, 2.0, -4.0]);
        assert_eq!(v, vec![1.0, 3.0, -1.0]);
    }

    #[test]
    fn test_clamp_series() {
        let v = clamp_series(&[-150.0, -50.0, 0.0, 120.0], -100.0, 100.0);
        assert_eq!(v, vec![-100.0, -50.0, 0.0, 100.0]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_sorted_interpolates() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile_sorted(&sorted, 0.0), 10.0);
        assert_eq!(percentile_sorted(&sorted, 100.0), 40.0);
        assert!((percentile_sorted(&sorted, 50.0) - 25.0).abs() < 1e-12);
        // 2.5th percentile of 1000 ranks sits between samples
        assert!((percentile_sorted(&sorted, 25.0) - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_sorted_single_value() {
        assert_eq!(percentile_sorted(&[42.0], 97.5), 42.0);
    }
}
