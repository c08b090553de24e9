use super::{Point2, Point3, Vector3};

/// Component-wise absolute value.
#[must_use]
pub fn abs(v: &Vector3) -> Vector3 {
    v.abs()
}

/// Copy of `v` with the given components replaced.
#[must_use]
pub fn with(v: &Vector3, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Vector3 {
    Vector3::new(x.unwrap_or(v.x), y.unwrap_or(v.y), z.unwrap_or(v.z))
}

/// Copy of `v` with the given amounts added to its components.
#[must_use]
pub fn offset(v: &Vector3, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Vector3 {
    v + Vector3::new(x.unwrap_or(0.0), y.unwrap_or(0.0), z.unwrap_or(0.0))
}

/// Drops the `z` coordinate.
#[must_use]
pub fn to_point2(p: &Point3) -> Point2 {
    p.xy()
}
