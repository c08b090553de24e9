pub mod easing;
pub mod extremum;
pub mod hash;
pub mod interpolate;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod scalar;
pub mod vector_2d;
pub mod vector_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Below this `|normal · direction|` a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Relative tolerance used by [`scalar::approx_eq`].
pub const APPROX_RELATIVE_EPSILON: f64 = 1e-6;

/// Largest decimal count the rounding helpers accept.
pub const MAX_ROUND_DECIMALS: i32 = 15;

/// Degrees in a full turn.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Numeric thresholds for the tolerance-driven helpers.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances {
    /// Ray/plane parallelism threshold on `|normal · direction|`.
    pub parallel: f64,
    /// Relative tolerance for approximate equality.
    pub approx_relative: f64,
    /// Absolute floor for approximate equality near zero.
    pub approx_absolute: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            parallel: PARALLEL_EPSILON,
            approx_relative: APPROX_RELATIVE_EPSILON,
            approx_absolute: f64::EPSILON * 8.0,
        }
    }
}

/// Clamps `value` into `[0, 1]`.
#[must_use]
pub(crate) fn clamp01(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}
