use std::f64::consts::PI;

use super::{clamp01, Point2, Point3};

/// Shape of the elastic easing curves.
#[derive(Debug, Clone, Copy)]
pub struct ElasticParams {
    /// Height of the oscillation relative to the eased value.
    pub amplitude: f64,
    /// Fraction of the curve over which the oscillation dies out.
    pub length: f64,
}

impl Default for ElasticParams {
    fn default() -> Self {
        Self {
            amplitude: 0.25,
            length: 0.6,
        }
    }
}

/// Fractional part of `value`, keeping its sign (`-1.75` gives `-0.75`).
#[must_use]
pub fn fract(value: f64) -> f64 {
    value - value.trunc()
}

/// Component-wise [`fract`].
#[must_use]
pub fn fract_2d(value: &Point2) -> Point2 {
    value.map(fract)
}

/// Component-wise [`fract`].
#[must_use]
pub fn fract_3d(value: &Point3) -> Point3 {
    value.map(fract)
}

/// Half-sine bounce repeating every unit: `|sin((value mod 1) * pi)|`.
#[must_use]
pub fn bounce(value: f64) -> f64 {
    ((value % 1.0) * PI).sin().abs()
}

/// Rises slowly then returns quickly: `0` at `t = 0` and `t = 1`, peaking at
/// `t = 1/sqrt(2)`.
#[must_use]
pub fn bounce_ease_in_fast_out(t: f64) -> f64 {
    (t * t * PI * 2.0).cos() * -0.5 + 0.5
}

/// Elastic ease-in over `[0, 1]`; `value` is clamped.
#[must_use]
pub fn ease_in_elastic(value: f64, params: &ElasticParams) -> f64 {
    let value = clamp01(value);
    let ramp = clamp01(value * 7.5);
    let settle = 1.0 - ramp * ramp * (3.0 - 2.0 * ramp);
    let damping = (1.0 - ((value * (1.0 - params.length)).min(0.5) * PI).sin()).powi(2);
    1.0 + ((PI + value * 23.0).cos() * params.amplitude + settle * -(1.0 - params.amplitude))
        * damping
}

/// Elastic ease-out, the mirror image of [`ease_in_elastic`].
#[must_use]
pub fn ease_out_elastic(value: f64, params: &ElasticParams) -> f64 {
    1.0 - ease_in_elastic(1.0 - value, params)
}

/// Smooth rise and fall: `0` at both ends of `[0, 1]`, `1` at `t = 0.5`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let x = 1.0 - (clamp01(t) * 2.0 - 1.0).abs();
    x * x * (3.0 - 2.0 * x)
}
