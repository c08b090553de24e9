use tracing::debug;

use super::{Tolerances, FULL_CIRCLE_DEGREES, MAX_ROUND_DECIMALS};
use crate::error::{MathError, Result};

/// Modular wraparound into a half-open range.
///
/// The range runs from the smaller of `min`/`max` over `|max - min|`, so
/// inverted bounds describe the same range. The result always lies in
/// `[lo, lo + span)`: a value equal to either bound maps to the lower one.
/// An empty range (`min == max`) returns that bound.
pub trait Wrap: Sized {
    #[must_use]
    fn wrap(self, min: Self, max: Self) -> Self;
}

macro_rules! impl_wrap_float {
    ($($t:ty),*) => {$(
        impl Wrap for $t {
            fn wrap(self, min: Self, max: Self) -> Self {
                let lo = if min < max { min } else { max };
                let span = (max - min).abs();
                if span <= 0.0 || !span.is_finite() {
                    return lo;
                }
                let offset = (self - lo).rem_euclid(span);
                // rem_euclid rounds up to `span` for tiny negative offsets.
                if offset >= span {
                    lo
                } else {
                    lo + offset
                }
            }
        }
    )*};
}

macro_rules! impl_wrap_int {
    ($($t:ty => $wide:ty),*) => {$(
        impl Wrap for $t {
            fn wrap(self, min: Self, max: Self) -> Self {
                let lo = min.min(max);
                let span = (<$wide>::from(max) - <$wide>::from(min)).abs();
                if span == 0 {
                    return lo;
                }
                let offset = (<$wide>::from(self) - <$wide>::from(lo)).rem_euclid(span);
                <$t>::try_from(<$wide>::from(lo) + offset).unwrap_or(lo)
            }
        }
    )*};
}

impl_wrap_float!(f32, f64);
impl_wrap_int!(i32 => i64, i64 => i128);

/// Clamps `angle` (degrees) into `[min, max]` after shifting negative
/// inputs into `[0, 360]`.
///
/// Despite the name this does not wrap cyclically: an angle past either
/// bound sticks to that bound. When the bounds are more than a full turn
/// apart, both `angle` and the upper bound are shifted up by whole turns;
/// inverted bounds (`min > max`) extend the upper bound by one more turn.
#[must_use]
pub fn clamp_wrap_angle(angle: f64, min: f64, max: f64) -> f64 {
    let positive = |a: f64| {
        if a < 0.0 {
            a % FULL_CIRCLE_DEGREES + FULL_CIRCLE_DEGREES
        } else {
            a
        }
    };

    let lower = positive(min);
    let turns = ((min - max).abs() / FULL_CIRCLE_DEGREES).trunc() * FULL_CIRCLE_DEGREES;
    let mut upper = positive(max) + turns;
    if min > max {
        upper += FULL_CIRCLE_DEGREES;
    }

    let mut angle = positive(angle) + turns;
    if angle < lower {
        angle = lower;
    }
    if angle > upper {
        angle = upper;
    }
    angle
}

/// Largest magnitude below which an `f64` can still carry a fractional part.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Applies `round` to `value` scaled by `10^digits`.
///
/// Values whose scaled form overflows, or is already integral, come back
/// unchanged.
fn round_scaled(value: f64, digits: i32, round: fn(f64) -> f64) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }
    round(scaled) / scale
}

/// Rounds `value` to `digits` decimals, breaking ties away from zero.
fn round_half_away(value: f64, digits: i32) -> f64 {
    round_scaled(value, digits, f64::round)
}

/// Rounds `value` to `digits` decimals, breaking ties to the even neighbor.
fn round_half_even(value: f64, digits: i32) -> f64 {
    round_scaled(value, digits, f64::round_ties_even)
}

/// Number of decimals needed to resolve steps of `min_difference`.
#[allow(clippy::cast_possible_truncation)]
fn decimals_for_minimum_difference(min_difference: f64) -> i32 {
    let decimals = -(min_difference.abs().log10().floor()) as i32;
    decimals.clamp(0, MAX_ROUND_DECIMALS)
}

/// Rounds `value` to as many decimals as needed to resolve `min_difference`.
///
/// A non-zero `min_difference` of `0.05` keeps two decimals, `3` keeps none;
/// ties round away from zero. A zero `min_difference` falls back to
/// [`discard_least_significant_decimal`].
///
/// # Errors
///
/// Returns [`MathError::NonFinite`] when `value` or `min_difference` is NaN
/// or infinite, and propagates the errors of
/// [`discard_least_significant_decimal`] when `min_difference` is zero.
#[allow(clippy::float_cmp)]
pub fn round_based_on_minimum_difference(value: f64, min_difference: f64) -> Result<f64> {
    for v in [value, min_difference] {
        if !v.is_finite() {
            debug!(value = v, "non-finite rounding input");
            return Err(MathError::NonFinite { value: v }.into());
        }
    }
    if min_difference == 0.0 {
        return discard_least_significant_decimal(value);
    }
    Ok(round_half_away(
        value,
        decimals_for_minimum_difference(min_difference),
    ))
}

/// Keeps roughly five significant digits of `value`, rounding ties to even.
///
/// The decimal count is `trunc(5 - log10|value|)`, floored at zero.
///
/// # Errors
///
/// Returns [`MathError::NonFinite`] for NaN or infinite input, and
/// [`MathError::DecimalsOutOfRange`] when the decimal count exceeds
/// [`MAX_ROUND_DECIMALS`], which happens for zero and for any value of
/// magnitude around `1e-11` or below.
#[allow(clippy::cast_possible_truncation)]
pub fn discard_least_significant_decimal(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MathError::NonFinite { value }.into());
    }
    let digits = ((5.0 - value.abs().log10()) as i32).max(0);
    if digits > MAX_ROUND_DECIMALS {
        debug!(value, digits, "decimal count out of range");
        return Err(MathError::DecimalsOutOfRange { value, digits }.into());
    }
    Ok(round_half_even(value, digits))
}

/// Relative float comparison with an absolute floor near zero, using the
/// default [`Tolerances`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_with(a, b, &Tolerances::default())
}

/// `|b - a| < max(approx_relative * max(|a|, |b|), approx_absolute)`.
#[must_use]
pub fn approx_eq_with(a: f64, b: f64, tol: &Tolerances) -> bool {
    let scale = a.abs().max(b.abs());
    (b - a).abs() < (tol.approx_relative * scale).max(tol.approx_absolute)
}

/// `part / whole` as a fraction, or `0.0` when `whole` is zero.
#[must_use]
pub fn percentage_of(part: i32, whole: i32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole)
}
