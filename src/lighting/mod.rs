mod point;

pub use point::*;

/// The influence of a light on one ray intersection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightShading {
    /// Cosine between the surface normal and the direction to the light.
    /// Not clamped: a back-facing point carries a negative value.
    pub diffuse: f64,

    /// Highlight term, already zero for non-positive bases.
    pub specular: f64,
}

impl LightShading {
    pub fn new(diffuse: f64, specular: f64) -> Self {
        Self { diffuse, specular }
    }
}
