use crate::math::{Ray, Vector3};

/// How rays leave the image plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Every ray shares `direction`; the origin slides across the image plane.
    Orthographic { direction: Vector3 },

    /// Every ray starts at the camera origin (the eye). `axis` is the viewing
    /// axis already scaled by the focal length; the per-pixel offset is added
    /// to it, so directions are left unnormalized.
    Perspective { axis: Vector3 },
}

/// A square camera over `size` x `size` pixels. Constant for a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Orthographic: world position of pixel (0, 0). Perspective: the eye.
    pub origin: Vector3,

    /// World displacement between horizontally adjacent pixels.
    pub x_step: Vector3,

    /// World displacement between vertically adjacent pixels.
    pub y_step: Vector3,

    pub size: u32,
    pub projection: Projection,
}

impl Camera {
    /// An orthographic camera looking down -z whose image plane spans
    /// `extent` world units in both axes, starting at `origin` (top-left).
    pub fn orthographic(origin: Vector3, extent: f64, size: u32) -> Self {
        let (x_step, y_step) = Self::steps(extent, size);
        Self {
            origin,
            x_step,
            y_step,
            size,
            projection: Projection::Orthographic {
                direction: Vector3::forward(),
            },
        }
    }

    /// A perspective camera with its eye at `eye`, looking down -z through a
    /// plane `focal` units away that spans `extent` world units.
    pub fn perspective(eye: Vector3, focal: f64, extent: f64, size: u32) -> Self {
        let (x_step, y_step) = Self::steps(extent, size);
        Self {
            origin: eye,
            x_step,
            y_step,
            size,
            projection: Projection::Perspective {
                axis: Vector3::forward() * focal,
            },
        }
    }

    fn steps(extent: f64, size: u32) -> (Vector3, Vector3) {
        let step = extent / size as f64;
        (Vector3::new(step, 0., 0.), Vector3::new(0., -step, 0.))
    }

    /// The ray through pixel column `i`, row `j`. Row 0 is the top of the image.
    pub fn ray_at(&self, i: u32, j: u32) -> Ray {
        let offset = self.x_step * i as f64 + self.y_step * j as f64;
        match self.projection {
            Projection::Orthographic { direction } => Ray::new(self.origin + offset, direction),
            Projection::Perspective { axis } => Ray::new(self.origin, axis + offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{Camera, Projection};
    use crate::math::Vector3;

    #[test]
    fn orthographic_rays_are_parallel() {
        let camera = Camera::orthographic(Vector3::new(-1., 1., 1.), 2., 800);
        let a = camera.ray_at(0, 0);
        let b = camera.ray_at(799, 123);

        assert_eq!(a.origin, Vector3::new(-1., 1., 1.));
        assert_eq!(a.direction, b.direction);
        assert_eq!(a.direction, Vector3::new(0., 0., -1.));

        let center = camera.ray_at(400, 400);
        assert_relative_eq!(center.origin.x, 0., epsilon = 1e-12);
        assert_relative_eq!(center.origin.y, 0., epsilon = 1e-12);
        assert_eq!(center.origin.z, 1.);
    }

    #[test]
    fn perspective_rays_share_the_eye() {
        let camera = Camera::perspective(Vector3::new(0., 0., 10.), 10., 6., 800);
        assert_eq!(
            camera.projection,
            Projection::Perspective {
                axis: Vector3::new(0., 0., -10.)
            }
        );

        let a = camera.ray_at(0, 0);
        let b = camera.ray_at(400, 200);
        assert_eq!(a.origin, b.origin);
        assert_eq!(a.direction, Vector3::new(0., 0., -10.));
        assert_relative_eq!(b.direction.x, 3., epsilon = 1e-12);
        assert_relative_eq!(b.direction.y, -1.5, epsilon = 1e-12);
        assert_eq!(b.direction.z, -10.);
    }

    #[test]
    fn steps_follow_resolution() {
        let coarse = Camera::orthographic(Vector3::ZERO, 6., 6);
        assert_eq!(coarse.ray_at(3, 2).origin, Vector3::new(3., -2., 0.));
    }
}
