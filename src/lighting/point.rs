use crate::{
    math::{Ray, Vector3},
    object::Hit,
};

use super::LightShading;

/// A point light, which emits in all directions from a specified position.
/// It has no color or falloff; every pass uses exactly one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3,
}

impl PointLight {
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Signed cosine between the hit normal and the direction to the light.
    pub fn lambert(&self, hit: &Hit) -> f64 {
        (self.position - hit.point).normalize().dot(hit.normal)
    }

    /// Lambertian intensity, never negative.
    pub fn diffuse(&self, hit: &Hit) -> f64 {
        self.lambert(hit).max(0.)
    }

    /// A tight highlight: the normal compared against the light direction
    /// offset by the ray origin, raised to `shininess`.
    ///
    /// Zero when the base is zero or negative, so huge exponents never see a
    /// negative base.
    pub fn specular(&self, ray: &Ray, hit: &Hit, shininess: f64) -> f64 {
        let base = hit
            .normal
            .dot((ray.origin + self.position - hit.point).normalize());
        if base > 0. {
            base.powf(shininess)
        } else {
            0.
        }
    }

    pub fn shading(&self, ray: &Ray, hit: &Hit, shininess: f64) -> LightShading {
        LightShading::new(self.lambert(hit), self.specular(ray, hit, shininess))
    }
}
