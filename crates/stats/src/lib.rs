//! Statistical helper functions shared across the Tethys crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Largest value of a slice, ignoring NaN. Returns NaN if no finite-or-infinite
/// value is present.
pub fn max(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v > acc { v } else { acc })
}

/// Smallest value of a slice, ignoring NaN. Returns NaN if no non-NaN value
/// is present.
pub fn min(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, |acc, v| if acc.is_nan() || v < acc { v } else { acc })
}

/// Linear-interpolation quantile (R type 7, numpy "linear").
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Rounds `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
///
/// Used wherever a ratio of physical quantities has a defined "nothing to
/// compare against" value (clearness at night, sky-cover fractions).
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Clamps every value of `data` to `[lo, hi]` in place. NaN becomes `lo`.
pub fn clip(data: &mut [f64], lo: f64, hi: f64) {
    for val in data.iter_mut() {
        if val.is_nan() {
            *val = lo;
        }
        *val = val.clamp(lo, hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_max_min() {
        let data = [3.0, -1.0, f64::NAN, 7.5, 0.0];
        assert_eq!(max(&data), 7.5);
        assert_eq!(min(&data), -1.0);
    }

    #[test]
    fn test_max_min_all_nan() {
        assert!(max(&[f64::NAN, f64::NAN]).is_nan());
        assert!(min(&[]).is_nan());
    }

    #[test]
    fn test_quantile_type7_median() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.5), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_bounds() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile_type7(&sorted, 1.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_r_crossvalidation() {
        // R: quantile(1:10, 0.3, type=7) = 3.7
        let sorted: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(quantile_type7(&sorted, 0.3), 3.7, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-1.235, 1), -1.2);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_ratio_or_zero() {
        assert_eq!(ratio_or_zero(3.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(0.0, 0.0), 0.0);
        assert_relative_eq!(ratio_or_zero(3.0, 4.0), 0.75);
    }

    #[test]
    fn test_clip() {
        let mut data = vec![-5.0, 0.5, 50.0, 150.0, f64::NAN];
        clip(&mut data, 1.0, 100.0);
        assert_eq!(data, vec![1.0, 1.0, 50.0, 100.0, 1.0]);
    }

    #[test]
    fn test_clip_idempotent() {
        let mut data = vec![-3.0, 4.0, 12.0];
        clip(&mut data, 0.0, 10.0);
        let first = data.clone();
        clip(&mut data, 0.0, 10.0);
        assert_eq!(data, first);
    }
}
