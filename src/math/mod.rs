mod matrix;
mod ray;
mod vector;

pub use matrix::*;
pub use ray::*;
pub use vector::*;

/// A very small value, close to zero, used as a relative tolerance when
/// deciding that a linear system is singular.
pub const EPSILON: f64 = 0.00000000001;
