use std::{
    fmt, fs,
    path::PathBuf,
    str::FromStr,
    time::Instant,
};

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    buffer::PixelBuffer,
    camera::Camera,
    error::RenderError,
    lighting::PointLight,
    material::{Color, Material, Shading},
    math::Vector3,
    object::{Hit, Intersect, OriginSphere, Parallelogram},
    options::RenderOptions,
};

/// The four fixed renders this program knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    SphereOrthographic,
    PlaneOrthographic,
    PlanePerspective,
    Shading,
}

impl PassKind {
    pub const ALL: [PassKind; 4] = [
        PassKind::SphereOrthographic,
        PassKind::PlaneOrthographic,
        PassKind::PlanePerspective,
        PassKind::Shading,
    ];

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::SphereOrthographic => "sphere",
            Self::PlaneOrthographic => "plane",
            Self::PlanePerspective => "perspective",
            Self::Shading => "shading",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            Self::SphereOrthographic => "sphere_orthographic.png",
            Self::PlaneOrthographic => "plane_orthographic.png",
            Self::PlanePerspective => "plane_perspective.png",
            Self::Shading => "shading.png",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SphereOrthographic => "Simple ray tracer, one sphere with orthographic projection",
            Self::PlaneOrthographic => {
                "Simple ray tracer, one parallelogram with orthographic projection"
            }
            Self::PlanePerspective => {
                "Simple ray tracer, one parallelogram with perspective projection"
            }
            Self::Shading => "Simple ray tracer, one sphere with different shading",
        }
    }

    /// Set up the camera, geometry, and light of this pass for `size` x `size` pixels.
    pub fn build(self, size: u32) -> Pass {
        match self {
            Self::SphereOrthographic => Pass {
                kind: self,
                camera: Camera::orthographic(Vector3::new(-1., 1., 1.), 2., size),
                object: Box::new(OriginSphere::new(1.)),
                light: PointLight::new(Vector3::new(-1., 1., 1.)),
                shading: Shading::Diffuse,
            },
            Self::PlaneOrthographic => Pass {
                kind: self,
                camera: Camera::orthographic(Vector3::new(-3., 3., 1.), 6., size),
                object: Box::new(Parallelogram::from_corners(
                    Vector3::new(-2., -1., 0.),
                    Vector3::new(1., -1., 0.),
                    Vector3::new(-1., 1., 0.),
                )),
                light: PointLight::new(Vector3::new(-3., 3., 1.)),
                shading: Shading::Diffuse,
            },
            Self::PlanePerspective => Pass {
                kind: self,
                camera: Camera::perspective(Vector3::new(0., 0., 10.), 10., 6., size),
                object: Box::new(Parallelogram::from_corners(
                    Vector3::new(2., -1., -4.),
                    Vector3::new(5., -3., -2.),
                    Vector3::new(0., -3., -2.),
                )),
                light: PointLight::new(Vector3::new(3., -5., 3.)),
                shading: Shading::Diffuse,
            },
            Self::Shading => Pass {
                kind: self,
                camera: Camera::orthographic(Vector3::new(-1., 1., 1.), 2., size),
                object: Box::new(OriginSphere::new(0.9)),
                light: PointLight::new(Vector3::new(-1., 1., 1.)),
                shading: Shading::Phong(Material {
                    tint: Color::from_rgb8(235, 183, 52),
                    ambient: 0.1,
                    shininess: 100000.,
                }),
            },
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PassKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RenderError::UnknownPass(s.to_owned()))
    }
}

/// One self-contained render: a camera, a single object, a single light and
/// a shading model. Nothing is shared between passes.
pub struct Pass {
    pub kind: PassKind,
    pub camera: Camera,
    pub object: Box<dyn Intersect>,
    pub light: PointLight,
    pub shading: Shading,
}

impl Pass {
    /// Intersect the ray through pixel (i, j) with this pass's object.
    pub fn intersect_pixel(&self, i: u32, j: u32) -> Option<Hit> {
        self.object.intersect(&self.camera.ray_at(i, j))
    }

    /// Trace out a pixel, where top-left of the image is (0, 0). `None` is a
    /// miss. This function is run many times in parallel.
    pub fn trace_pixel(&self, i: u32, j: u32) -> Option<Color> {
        let ray = self.camera.ray_at(i, j);
        let hit = self.object.intersect(&ray)?;
        Some(self.shading.shade(&self.light, &ray, &hit))
    }

    /// Render every pixel into a fresh buffer.
    pub fn render(&self) -> PixelBuffer {
        let size = self.camera.size;
        let width = size as usize;

        // pixels are independent
        let pixels = (0..width * width)
            .into_par_iter()
            .map(|idx| self.trace_pixel((idx % width) as u32, (idx / width) as u32))
            .collect::<Vec<_>>();

        PixelBuffer::from_pixels(size, pixels)
    }

    /// Render and write this pass's PNG into `options.output_dir`, returning
    /// the written path.
    pub fn render_to(&self, options: &RenderOptions) -> Result<PathBuf, RenderError> {
        info!("{}", self.kind.description());
        let start_time = Instant::now();

        let buffer = self.render();
        debug!(
            "{}: {} of {} pixels hit",
            self.kind,
            buffer.hits(),
            buffer.size() as u64 * buffer.size() as u64
        );

        let path = options.output_dir.join(self.kind.filename());
        buffer.save(&path)?;

        info!(
            "Wrote {} in {}s",
            path.display(),
            start_time.elapsed().as_secs_f32()
        );
        Ok(path)
    }
}

/// Run the given passes in order, stopping at the first failure.
pub fn render_all(
    options: &RenderOptions,
    kinds: &[PassKind],
) -> Result<Vec<PathBuf>, RenderError> {
    options.validate()?;
    fs::create_dir_all(&options.output_dir)?;

    kinds
        .iter()
        .map(|kind| kind.build(options.size).render_to(options))
        .collect()
}
