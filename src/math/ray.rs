use super::Vector3;

/// A half-line in world space. The direction is not required to be
/// normalized; perspective rays carry their pixel offset in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along this ray.
    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
