mod parallelogram;
mod sphere;

use crate::math::{Ray, Vector3};

pub use parallelogram::*;
pub use sphere::*;

/// The result of a ray intersection. Lives only while a pixel is shaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection, in units of the ray's direction.
    pub t: f64,

    /// World-space intersection point.
    pub point: Vector3,

    /// Unit surface normal at `point`.
    pub normal: Vector3,
}

impl Hit {
    pub fn new(t: f64, point: Vector3, normal: Vector3) -> Self {
        Self { t, point, normal }
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect: Send + Sync {
    /// Find the intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
