use std::ops::Mul;

use crate::{lighting::PointLight, math::Ray, object::Hit};

/// A linear RGB color. Channels are nominally 0-1 but are allowed to exceed
/// 1; only negative values are ruled out before export.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn black() -> Self {
        Self::default()
    }

    /// Instantiate a new Color.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// The same value in every channel.
    pub fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Instantiate a new Color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255., g as f64 / 255., b as f64 / 255.)
    }

    /// Clamp every channel to be non-negative. There is no upper clamp.
    pub fn clamp_negative(self) -> Self {
        Self::new(self.r.max(0.), self.g.max(0.), self.b.max(0.))
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Surface parameters for the ambient + diffuse + specular model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// The base color, applied to every lighting term.
    pub tint: Color,
    pub ambient: f64,

    /// Exponent of the specular term. Very large values give a pinpoint highlight.
    pub shininess: f64,
}

/// How a pass turns an intersection into a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Grayscale Lambertian intensity.
    Diffuse,

    /// Tinted ambient + diffuse + specular.
    Phong(Material),
}

impl Shading {
    /// Shade one intersection. The result never has a negative channel.
    pub fn shade(&self, light: &PointLight, ray: &Ray, hit: &Hit) -> Color {
        match self {
            Self::Diffuse => Color::gray(light.diffuse(hit)),
            Self::Phong(material) => {
                let shading = light.shading(ray, hit, material.shininess);
                let total = material.ambient + shading.diffuse + shading.specular;
                (material.tint * total).clamp_negative()
            }
        }
    }
}
