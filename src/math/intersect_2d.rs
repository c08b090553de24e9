use tracing::debug;

use super::{Point2, Vector2};
use crate::error::{MathError, Result};

/// 2D cross product (z component of the 3D cross product).
fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` if segment `a1 → a2` lies entirely on one side of the
/// axis-aligned bounding box of `b1 → b2`.
fn outside_bounding_box(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> bool {
    let (min_x, max_x) = if b1.x < b2.x { (b1.x, b2.x) } else { (b2.x, b1.x) };
    let (min_y, max_y) = if b1.y < b2.y { (b1.y, b2.y) } else { (b2.y, b1.y) };

    (a1.x < min_x && a2.x < min_x)
        || (a1.y > max_y && a2.y > max_y)
        || (a1.x > max_x && a2.x > max_x)
        || (a1.y < min_y && a2.y < min_y)
}

/// Intersection point of the bounded segments `a1 → a2` and `b1 → b2`.
///
/// Returns `None` when the segments miss each other, including when they
/// are parallel or collinear (zero determinant). Endpoints count as part of
/// the segment.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    if outside_bounding_box(a1, a2, b1, b2) {
        return None;
    }

    let da = a2 - a1;
    let db = b2 - b1;
    let det = cross(&da, &db);
    if det == 0.0 {
        return None;
    }

    let diff = b1 - a1;
    let t = cross(&diff, &db) / det;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let u = cross(&diff, &da) / det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(a1 + da * t)
}

/// Intersection point of the infinite line through `ps1`, `pe1` and the
/// infinite line through `ps2`, `pe2`.
///
/// # Errors
///
/// Returns [`MathError::ParallelLines`] if the lines are parallel or
/// coincident, where the intersection is undefined.
#[allow(clippy::float_cmp)]
pub fn infinite_line_intersect(
    ps1: &Point2,
    pe1: &Point2,
    ps2: &Point2,
    pe2: &Point2,
) -> Result<Point2> {
    // Each line as a x + b y = c.
    let a1 = pe1.y - ps1.y;
    let b1 = ps1.x - pe1.x;
    let c1 = a1 * ps1.x + b1 * ps1.y;

    let a2 = pe2.y - ps2.y;
    let b2 = ps2.x - pe2.x;
    let c2 = a2 * ps2.x + b2 * ps2.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        debug!(?ps1, ?pe1, ?ps2, ?pe2, "infinite line intersection of parallel lines");
        return Err(MathError::ParallelLines.into());
    }

    Ok(Point2::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
///
/// If `a == b` the line is degenerate and the distance to `a` is returned.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_distance_to_line(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dir = b - a;
    let len = dir.norm();
    if len == 0.0 {
        return nalgebra::distance(point, a);
    }
    cross(&dir, &(a - point)).abs() / len
}
