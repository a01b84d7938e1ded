use crate::math::{Matrix3, Ray, Vector3};

use super::{Hit, Intersect};

/// A flat parallelogram spanned by two edges from a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelogram {
    /// The corner both edges start from.
    pub origin: Vector3,
    pub u: Vector3,
    pub v: Vector3,
}

/// Parameters of a ray/plane solve: `origin + alpha * u + beta * v`
/// equals `ray.origin + t * ray.direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoords {
    pub alpha: f64,
    pub beta: f64,
    pub t: f64,
}

impl PlaneCoords {
    fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite() && self.t.is_finite()
    }

    /// Inside the parallelogram (edges included) and strictly ahead of the ray.
    pub fn is_hit(&self) -> bool {
        self.is_finite()
            && (0. ..=1.).contains(&self.alpha)
            && (0. ..=1.).contains(&self.beta)
            && self.t > 0.
    }
}

impl Parallelogram {
    pub fn new(origin: Vector3, u: Vector3, v: Vector3) -> Self {
        Self { origin, u, v }
    }

    /// Build from a corner and the two corners adjacent to it.
    pub fn from_corners(origin: Vector3, a: Vector3, b: Vector3) -> Self {
        Self::new(origin, a - origin, b - origin)
    }

    /// The world point at edge parameters `(alpha, beta)`.
    pub fn point_at(&self, alpha: f64, beta: f64) -> Vector3 {
        self.origin + self.u * alpha + self.v * beta
    }

    /// Unit normal `u x v`, before any orientation toward a viewer.
    pub fn normal(&self) -> Vector3 {
        self.u.cross(self.v).normalize()
    }

    /// Solve `[u | v | -d] * (alpha, beta, t) = ray.origin - origin`.
    ///
    /// `None` when the ray runs parallel to the plane.
    pub fn solve(&self, ray: &Ray) -> Option<PlaneCoords> {
        let system = Matrix3::from_columns(self.u, self.v, -ray.direction);
        let x = system.solve(ray.origin - self.origin)?;
        Some(PlaneCoords {
            alpha: x.x,
            beta: x.y,
            t: x.z,
        })
    }
}

impl Intersect for Parallelogram {
    /// The returned normal always faces back toward the ray origin, so the lit
    /// side is the side the camera sees regardless of edge order.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let coords = self.solve(ray)?;
        if !coords.is_hit() {
            return None;
        }

        let mut normal = self.normal();
        if !normal.is_finite() {
            return None;
        }
        if normal.dot(ray.direction) > 0. {
            normal = -normal;
        }

        Some(Hit::new(coords.t, ray.along(coords.t), normal))
    }
}
