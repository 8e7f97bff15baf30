//! Numeric helpers shared by every counter and formula.
//!
//! Scores must agree with published reference values on ties, so all rounding
//! goes through [`legacy_round`] rather than [`f64::round`].

/// Return `x` carrying the sign of `y`.
///
/// A zero `y` counts as positive, so `copy_sign(0.5, 0.0)` is `0.5`. `NaN`
/// for `y` is also treated as positive.
#[must_use]
pub fn copy_sign(x: f64, y: f64) -> f64 {
    if y < 0.0 { -x.abs() } else { x.abs() }
}

/// Round half away from zero at `points` decimal places.
///
/// Computes `floor(number * 10^points + copy_sign(0.5, number)) / 10^points`.
/// Non-finite input is returned unchanged.
#[must_use]
#[allow(clippy::suboptimal_flops)] // a fused multiply-add changes results on ties
pub fn legacy_round(number: f64, points: i32) -> f64 {
    if !number.is_finite() {
        return number;
    }
    let scale = 10f64.powi(points);
    (number * scale + copy_sign(0.5, number)).floor() / scale
}

/// Replace a non-finite value with `0.0`.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// [`legacy_round`], with non-finite results replaced by `0.0`.
#[must_use]
pub fn round_finite(number: f64, points: i32) -> f64 {
    finite_or_zero(legacy_round(number, points))
}

/// Divide two counts and round, falling back to `0.0` when the ratio is undefined.
#[must_use]
pub fn rounded_ratio(numer: usize, denom: usize, points: i32) -> f64 {
    if denom == 0 {
        return 0.0;
    }
    round_finite(numer as f64 / denom as f64, points)
}

/// Median of a slice, averaging the two middle values for even lengths.
///
/// Returns `0.0` for an empty slice. `NaN` values sort last.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_sign_treats_zero_as_positive() {
        assert_eq!(copy_sign(0.5, 0.0), 0.5);
        assert_eq!(copy_sign(0.5, -0.0), 0.5);
        assert_eq!(copy_sign(0.5, -3.0), -0.5);
        assert_eq!(copy_sign(-0.5, 7.0), 0.5);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(legacy_round(2.5, 0), 3.0);
        assert_eq!(legacy_round(-2.5, 0), -3.0);
        assert_eq!(legacy_round(3.5, 0), 4.0);
        assert_eq!(legacy_round(0.0, 0), 0.0);
    }

    #[test]
    fn rounds_at_requested_precision() {
        assert_eq!(legacy_round(4.26, 1), 4.3);
        assert_eq!(legacy_round(12.344, 2), 12.34);
        assert_eq!(legacy_round(1.0, 2), 1.0);
    }

    #[test]
    fn negative_values_floor_after_offset() {
        // floor(-2.4 - 0.5) lands on -3, matching the reference rounding.
        assert_eq!(legacy_round(-2.4, 0), -3.0);
        assert_eq!(legacy_round(-2.6, 0), -4.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(legacy_round(f64::NAN, 2).is_nan());
        assert_eq!(legacy_round(f64::INFINITY, 1), f64::INFINITY);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn rounded_ratio_guards_zero_denominator() {
        assert_eq!(rounded_ratio(5, 0, 2), 0.0);
        assert_eq!(rounded_ratio(10, 4, 1), 2.5);
        assert_eq!(rounded_ratio(2, 3, 2), 0.67);
    }

    #[test]
    fn median_odd_even_and_empty() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }
}
