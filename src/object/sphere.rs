use crate::math::{Ray, Vector3};

use super::{Hit, Intersect};

/// A sphere centered at the world origin, tested only against rays that
/// travel along the z axis.
///
/// This is the shortcut the orthographic passes rely on: the ray is dropped
/// onto the xy plane and compared against the radius. It gives wrong answers
/// for any other ray, so those are reported as misses; use [`Sphere`] for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginSphere {
    pub radius: f64,
}

impl OriginSphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Intersect for OriginSphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // only z-aligned rays can be answered by this shortcut
        if ray.direction.x != 0. || ray.direction.y != 0. || ray.direction.z == 0. {
            return None;
        }

        let (x, y) = (ray.origin.x, ray.origin.y);
        let planar2 = x * x + y * y;
        let rad2 = self.radius * self.radius;

        // tangent rays miss
        if planar2.sqrt() >= self.radius {
            return None;
        }

        // near side faces +z
        let point = Vector3::new(x, y, (rad2 - planar2).sqrt());
        let t = (point.z - ray.origin.z) / ray.direction.z;

        Some(Hit::new(t, point, point.normalize()))
    }
}

/// A sphere anywhere in space, intersected with the full quadratic.
///
/// None of the fixed passes use it; they all go through [`OriginSphere`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.magnitude_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.magnitude_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0. || a == 0. {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-half_b - root) / a;
        let far = (-half_b + root) / a;
        let t = if near > 0. {
            near
        } else if far > 0. {
            far
        } else {
            return None;
        };

        let point = ray.along(t);
        Some(Hit::new(t, point, (point - self.center) * (1. / self.radius)))
    }
}
