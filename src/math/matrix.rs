use super::{Vector3, EPSILON};

/// A 3x3 matrix, stored row by row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    pub rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Build a matrix from three column vectors.
    #[rustfmt::skip]
    pub fn from_columns(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self {
            rows: [
                [a.x, b.x, c.x],
                [a.y, b.y, c.y],
                [a.z, b.z, c.z],
            ],
        }
    }

    /// Solve `self * x = b` by Gaussian elimination with partial pivoting.
    ///
    /// Returns `None` when the matrix is singular or close enough to it that
    /// the pivots stop carrying information relative to the matrix scale.
    /// Callers must still check the result for non-finite components.
    pub fn solve(&self, b: Vector3) -> Option<Vector3> {
        let mut m = self.rows;
        let mut rhs: [f64; 3] = b.into();

        let scale = m
            .iter()
            .flatten()
            .fold(0f64, |acc, v| acc.max(v.abs()));
        if scale == 0. || !scale.is_finite() {
            return None;
        }
        let tolerance = scale * EPSILON;

        for col in 0..3 {
            // largest remaining entry in this column becomes the pivot
            let pivot = (col..3)
                .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
                .unwrap_or(col);
            if m[pivot][col].abs() <= tolerance {
                return None;
            }
            m.swap(col, pivot);
            rhs.swap(col, pivot);

            for row in col + 1..3 {
                let factor = m[row][col] / m[col][col];
                for k in col..3 {
                    m[row][k] -= factor * m[col][k];
                }
                rhs[row] -= factor * rhs[col];
            }
        }

        let mut x = [0f64; 3];
        for row in (0..3).rev() {
            let tail: f64 = (row + 1..3).map(|k| m[row][k] * x[k]).sum();
            x[row] = (rhs[row] - tail) / m[row][row];
        }

        Some(x.into())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::math::{Matrix3, Vector3};

    #[test]
    fn solve_recovers_known_solution() {
        let m = Matrix3::from_columns(
            Vector3::new(3., -2., 2.),
            Vector3::new(-2., -2., 2.),
            Vector3::new(0.4, -0.7, 10.),
        );
        let expected = Vector3::new(0.25, 0.6, 1.3);
        let b = Vector3::new(3., -2., 2.) * expected.x
            + Vector3::new(-2., -2., 2.) * expected.y
            + Vector3::new(0.4, -0.7, 10.) * expected.z;
        let x = m.solve(b).unwrap();

        assert_relative_eq!(x.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(x.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(x.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn solve_needs_pivoting_for_zero_leading_entry() {
        let m = Matrix3::from_columns(
            Vector3::new(0., 1., 0.),
            Vector3::new(1., 0., 0.),
            Vector3::new(0., 0., 2.),
        );
        let x = m.solve(Vector3::new(5., 7., 4.)).unwrap();
        assert_eq!(x, Vector3::new(7., 5., 2.));
    }

    #[test]
    fn singular_system_has_no_solution() {
        // third column lies in the span of the first two
        let m = Matrix3::from_columns(
            Vector3::new(1., 0., 0.),
            Vector3::new(0., 1., 0.),
            Vector3::new(1., 1., 0.),
        );
        assert!(m.solve(Vector3::new(1., 1., 1.)).is_none());
        assert!(Matrix3 { rows: [[0.; 3]; 3] }.solve(Vector3::ZERO).is_none());
    }
}
