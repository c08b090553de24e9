use super::{Point2, Vector2};

/// Clamps `v` into `[min, max]`; an inverted range resolves to `max`.
fn clamp_component(v: f64, min: f64, max: f64) -> f64 {
    let v = if v < min { min } else { v };
    if v > max {
        max
    } else {
        v
    }
}

/// Component-wise clamp of `value` into the box spanned by `min` and `max`.
///
/// Unlike [`f64::clamp`] this never panics; when a `min` component exceeds
/// the matching `max` component the result takes the `max` component.
#[must_use]
pub fn clamp(value: &Vector2, min: &Vector2, max: &Vector2) -> Vector2 {
    Vector2::new(
        clamp_component(value.x, min.x, max.x),
        clamp_component(value.y, min.y, max.y),
    )
}

/// Rotates `point` counter-clockwise about the origin by `degrees`.
#[must_use]
pub fn rotate(point: &Point2, degrees: f64) -> Point2 {
    rotate_around(point, &Point2::origin(), degrees)
}

/// Rotates `point` counter-clockwise about `pivot` by `degrees`.
#[must_use]
pub fn rotate_around(point: &Point2, pivot: &Point2, degrees: f64) -> Point2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - pivot;
    Point2::new(
        cos * d.x - sin * d.y + pivot.x,
        sin * d.x + cos * d.y + pivot.y,
    )
}
