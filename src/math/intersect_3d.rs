use tracing::trace;

use super::{Point3, Tolerances, Vector3};
use crate::error::{MathError, Result};

/// A half-line in 3D space: `origin + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `direction` has zero length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len <= 0.0 || !len.is_finite() {
            return Err(MathError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if `normal` has zero length.
    pub fn new(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len <= 0.0 || !len.is_finite() {
            return Err(MathError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            normal: normal / len,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed constant `d` of the plane equation `normal · p + d = 0`.
    #[must_use]
    pub fn distance(&self) -> f64 {
        -self.normal.dot(&self.origin.coords)
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance_to(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.distance()
    }
}

/// Distance along `ray` to where its supporting line meets `plane`.
///
/// The result is negative when the plane lies behind the ray origin.
/// Returns `None` when the ray is parallel to the plane within
/// [`PARALLEL_EPSILON`](super::PARALLEL_EPSILON).
#[must_use]
pub fn ray_plane_intersection(ray: &Ray, plane: &Plane) -> Option<f64> {
    ray_plane_intersection_with(ray, plane, &Tolerances::default())
}

/// [`ray_plane_intersection`] with an explicit parallelism threshold.
#[must_use]
pub fn ray_plane_intersection_with(ray: &Ray, plane: &Plane, tol: &Tolerances) -> Option<f64> {
    let denom = plane.normal().dot(ray.direction());
    if denom.abs() < tol.parallel {
        trace!(denom, "ray is parallel to plane");
        return None;
    }
    let numer = -plane.distance() - plane.normal().dot(&ray.origin().coords);
    Some(numer / denom)
}

/// Distance along `ray` to `plane`, or `0.0` when the ray is parallel to it.
///
/// `0.0` is also a legitimate answer for a ray starting on the plane; use
/// [`ray_plane_intersection`] to tell the two apart.
#[must_use]
pub fn ray_plane_distance(ray: &Ray, plane: &Plane) -> f64 {
    ray_plane_intersection(ray, plane).unwrap_or(0.0)
}

/// Distance between the plane and line origins, scaled by how closely the
/// line direction follows the plane normal.
///
/// `line_direction` is expected to be normalized.
#[must_use]
pub fn line_distance_to_plane(
    plane_origin: &Point3,
    plane_normal: &Vector3,
    line_origin: &Point3,
    line_direction: &Vector3,
) -> f64 {
    line_direction.dot(plane_normal) * nalgebra::distance(plane_origin, line_origin)
}
