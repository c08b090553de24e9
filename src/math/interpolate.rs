use tracing::debug;

use super::{clamp01, Point2, Point3};
use crate::error::{MathError, Result};

/// Smoothstep-weighted interpolation from `start` to `end`.
///
/// The weight `t² (3 - 2t)` is saturated to `[0, 1]` before blending; `t`
/// itself is not clamped, so callers wanting a monotonic curve should keep
/// `t` in `[0, 1]`. The blend is exact at both ends: `t = 0` yields `start`
/// and `t = 1` yields `end`.
#[must_use]
pub fn hermite(start: f64, end: f64, t: f64) -> f64 {
    let w = clamp01(t * t * (3.0 - 2.0 * t));
    start * (1.0 - w) + end * w
}

/// Applies [`hermite`] `count` times, feeding each result back in as `t`.
///
/// `count == 0` returns `t` unchanged.
#[must_use]
pub fn stack_hermite(start: f64, end: f64, t: f64, count: usize) -> f64 {
    (0..count).fold(t, |t, _| hermite(start, end, t))
}

/// [`hermite`] over the unit interval.
#[must_use]
pub fn hermite01(t: f64) -> f64 {
    hermite(0.0, 1.0, t)
}

/// [`stack_hermite`] over the unit interval.
#[must_use]
pub fn stack_hermite01(t: f64, count: usize) -> f64 {
    stack_hermite(0.0, 1.0, t, count)
}

/// Smoothstep of `t` between the edges `a` and `b`.
#[must_use]
pub fn smooth_step(a: f64, b: f64, t: f64) -> f64 {
    let x = linear_step(a, b, t);
    x * x * (3.0 - 2.0 * x)
}

/// Position of `t` between `a` and `b`, clamped to `[0, 1]`.
#[must_use]
pub fn linear_step(a: f64, b: f64, t: f64) -> f64 {
    clamp01((t - a) / (b - a))
}

/// `from + (to - from) * amount`, without clamping `amount`.
#[must_use]
pub fn lerp_unclamped_2d(from: &Point2, to: &Point2, amount: f64) -> Point2 {
    from + (to - from) * amount
}

/// `from + (to - from) * amount`, without clamping `amount`.
#[must_use]
pub fn lerp_unclamped_3d(from: &Point3, to: &Point3, amount: f64) -> Point3 {
    from + (to - from) * amount
}

/// Evaluates a uniform Catmull-Rom spline through `path` at `t` in `[0, 1]`.
///
/// `t` is mapped onto a segment, and the four control points around it are
/// looked up with their indices clamped to the path, so short paths repeat
/// their endpoints instead of reading out of bounds. A single-point path
/// evaluates to that point everywhere.
///
/// # Errors
///
/// Returns [`MathError::EmptyPath`] if `path` is empty.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn catmull_rom_path(path: &[Point3], t: f64) -> Result<Point3> {
    if path.is_empty() {
        debug!("catmull-rom evaluation on an empty path");
        return Err(MathError::EmptyPath.into());
    }
    let len = path.len() as f64;
    let last = path.len() - 1;

    let t = clamp01(t * (1.0 - 1.0 / len));
    let scaled = t * len;
    let floor = scaled.floor();
    let f = scaled - floor;
    let seg = (floor as usize).min(last);

    let p0 = path[seg.saturating_sub(1)].coords;
    let p1 = path[seg].coords;
    let p2 = path[(seg + 1).min(last)].coords;
    let p3 = path[(seg + 2).min(last)].coords;

    let cubic = -p0 + p1 * 3.0 - p2 * 3.0 + p3;
    let quadratic = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let linear = -p0 + p2;

    let f2 = f * f;
    let f3 = f2 * f;
    Ok(Point3::from(
        (cubic * f3 + quadratic * f2 + linear * f + p1 * 2.0) * 0.5,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn hermite_endpoints_are_exact() {
        for (a, b) in [(0.0, 1.0), (0.1, 0.7), (-3.25, 12.5), (1e9, -1e-9)] {
            assert_eq!(hermite(a, b, 0.0), a);
            assert_eq!(hermite(a, b, 1.0), b);
        }
    }

    #[test]
    fn hermite_midpoint() {
        assert_abs_diff_eq!(hermite(2.0, 4.0, 0.5), 3.0, epsilon = TOL);
        // Weight at t = 0.25 is 0.15625.
        assert_abs_diff_eq!(hermite(0.0, 10.0, 0.25), 1.5625, epsilon = TOL);
    }

    #[test]
    fn hermite_saturates_weight() {
        // t = 2 gives a raw weight of -4, saturated to 0.
        assert_eq!(hermite(1.0, 5.0, 2.0), 1.0);
        // t = -1 gives a raw weight of 5, saturated to 1.
        assert_eq!(hermite(1.0, 5.0, -1.0), 5.0);
    }

    #[test]
    fn stack_hermite_zero_count_is_identity() {
        assert_eq!(stack_hermite(0.0, 1.0, 0.5, 0), 0.5);
        assert_eq!(stack_hermite(-7.0, 3.0, 0.123, 0), 0.123);
    }

    #[test]
    fn stack_hermite_feeds_result_back() {
        let once = hermite(0.0, 1.0, 0.3);
        let twice = hermite(0.0, 1.0, once);
        assert_eq!(stack_hermite(0.0, 1.0, 0.3, 1), once);
        assert_eq!(stack_hermite(0.0, 1.0, 0.3, 2), twice);
        assert_eq!(stack_hermite01(0.3, 2), twice);
    }

    #[test]
    fn stack_hermite01_fixed_points() {
        assert_eq!(stack_hermite01(0.5, 5), 0.5);
        assert_eq!(stack_hermite01(0.0, 5), 0.0);
        assert_eq!(stack_hermite01(1.0, 5), 1.0);
        assert_abs_diff_eq!(hermite01(0.5), 0.5, epsilon = TOL);
    }

    #[test]
    fn smooth_and_linear_step() {
        assert_eq!(linear_step(10.0, 20.0, 5.0), 0.0);
        assert_eq!(linear_step(10.0, 20.0, 25.0), 1.0);
        assert_abs_diff_eq!(linear_step(10.0, 20.0, 12.5), 0.25, epsilon = TOL);
        assert_abs_diff_eq!(smooth_step(10.0, 20.0, 15.0), 0.5, epsilon = TOL);
        assert_abs_diff_eq!(smooth_step(0.0, 4.0, 1.0), 0.15625, epsilon = TOL);
    }

    #[test]
    fn lerp_unclamped_extrapolates() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, -4.0, 1.0);
        let p = lerp_unclamped_3d(&a, &b, 1.5);
        assert_abs_diff_eq!(p, Point3::new(3.0, -6.0, 1.5), epsilon = TOL);

        let p = lerp_unclamped_2d(&Point2::new(1.0, 1.0), &Point2::new(3.0, 1.0), -0.5);
        assert_abs_diff_eq!(p, Point2::new(0.0, 1.0), epsilon = TOL);
    }

    // ── catmull_rom_path ──

    fn zigzag() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 3.0, 1.0),
            Point3::new(4.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn catmull_rom_empty_path_fails() {
        let err = catmull_rom_path(&[], 0.5).unwrap_err();
        assert!(matches!(
            err,
            crate::GeomkitError::Math(MathError::EmptyPath)
        ));
    }

    #[test]
    fn catmull_rom_single_point() {
        let p = Point3::new(1.5, -2.0, 7.0);
        for t in [0.0, 0.1, 0.5, 0.999, 1.0] {
            assert_eq!(catmull_rom_path(&[p], t).unwrap(), p, "t={t}");
        }
    }

    #[test]
    fn catmull_rom_two_points() {
        let path = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 0.0)];
        assert_abs_diff_eq!(catmull_rom_path(&path, 0.0).unwrap(), path[0], epsilon = TOL);
        assert_abs_diff_eq!(catmull_rom_path(&path, 1.0).unwrap(), path[1], epsilon = TOL);

        // t = 0.5 maps to the middle of the only segment; with both outer
        // control points repeated the curve is symmetric about it.
        let mid = catmull_rom_path(&path, 0.5).unwrap();
        assert_abs_diff_eq!(mid, Point3::new(1.0, 2.0, 0.0), epsilon = TOL);

        let quarter = catmull_rom_path(&path, 0.25).unwrap();
        assert_abs_diff_eq!(quarter, Point3::new(0.40625, 0.8125, 0.0), epsilon = TOL);
    }

    #[test]
    fn catmull_rom_three_points() {
        let path = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert_abs_diff_eq!(catmull_rom_path(&path, 0.0).unwrap(), path[0], epsilon = TOL);
        assert_abs_diff_eq!(catmull_rom_path(&path, 1.0).unwrap(), path[2], epsilon = TOL);
        // t = 0.5 lands on the middle control point.
        assert_abs_diff_eq!(catmull_rom_path(&path, 0.5).unwrap(), path[1], epsilon = TOL);
    }

    #[test]
    fn catmull_rom_four_points_endpoints() {
        let path = zigzag();
        assert_abs_diff_eq!(catmull_rom_path(&path, 0.0).unwrap(), path[0], epsilon = TOL);
        assert_abs_diff_eq!(catmull_rom_path(&path, 1.0).unwrap(), path[3], epsilon = TOL);
    }

    #[test]
    fn catmull_rom_collinear_is_linear_inside() {
        let path: Vec<Point3> = (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        // t = 0.5 maps to scaled position 2.0 on a 5-point path.
        let p = catmull_rom_path(&path, 0.5).unwrap();
        assert_abs_diff_eq!(p, Point3::new(2.0, 0.0, 0.0), epsilon = TOL);
        // Halfway through segment 1..2.
        let p = catmull_rom_path(&path, 1.5 / 4.0).unwrap();
        assert_abs_diff_eq!(p, Point3::new(1.5, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn catmull_rom_continuous_across_segment_boundary() {
        let path = zigzag();
        // Scaled position 2.0 on a 4-point path is t = 2/3.
        let boundary = 2.0 / 3.0;
        let below = catmull_rom_path(&path, boundary - 1e-9).unwrap();
        let at = catmull_rom_path(&path, boundary).unwrap();
        let above = catmull_rom_path(&path, boundary + 1e-9).unwrap();
        assert_abs_diff_eq!(at, path[2], epsilon = 1e-6);
        assert_abs_diff_eq!(below, path[2], epsilon = 1e-6);
        assert_abs_diff_eq!(above, path[2], epsilon = 1e-6);
    }

    #[test]
    fn catmull_rom_clamps_t() {
        let path = zigzag();
        assert_abs_diff_eq!(catmull_rom_path(&path, -3.0).unwrap(), path[0], epsilon = TOL);
        assert_abs_diff_eq!(catmull_rom_path(&path, 4.0).unwrap(), path[3], epsilon = TOL);
    }
}
