//! Affine transforms in homogeneous coordinates.
//!
//! A [`Transform`] maps `(x, y) -> (a*x + b*y + c, d*x + e*y + f)`.
//! Transforms compose left to right with [`Transform::then`], so
//! `t1.then(t2)` applies `t1` first.

use nalgebra::{Matrix3, Vector3};

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            matrix: Matrix3::identity(),
        }
    }

    /// `(x, y) -> (a*x + b*y + c, d*x + e*y + f)`
    #[allow(clippy::many_single_char_names)]
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform {
            matrix: Matrix3::new(
                a, b, c, //
                d, e, f, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_coefficients(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// Counterclockwise rotation about the origin, angle in degrees.
    pub fn rotation(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from_coefficients(c, -s, 0.0, s, c, 0.0)
    }

    /// Counterclockwise rotation about `center`, angle in degrees.
    pub fn rotation_about(center: Point, degrees: f64) -> Self {
        Self::translation(-center.x, -center.y)
            .then(Self::rotation(degrees))
            .then(Self::translation(center.x, center.y))
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_coefficients(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// Reflection across the horizontal line `y = axis_y`.
    pub fn mirror_horizontal(axis_y: f64) -> Self {
        Self::from_coefficients(1.0, 0.0, 0.0, 0.0, -1.0, 2.0 * axis_y)
    }

    /// Reflection across the vertical line `x = axis_x`.
    pub fn mirror_vertical(axis_x: f64) -> Self {
        Self::from_coefficients(-1.0, 0.0, 2.0 * axis_x, 0.0, 1.0, 0.0)
    }

    /// Apply `self`, then `next`.
    pub fn then(self, next: Transform) -> Transform {
        Transform {
            matrix: next.matrix * self.matrix,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    /// Linear part only (no translation), for direction vectors.
    pub fn apply_vector(&self, dx: f64, dy: f64) -> (f64, f64) {
        let v = self.matrix * Vector3::new(dx, dy, 0.0);
        (v.x, v.y)
    }

    /// Determinant of the linear part. Negative for reflections.
    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    pub fn is_reflection(&self) -> bool {
        self.determinant() < 0.0
    }

    /// Uniform length scale implied by the linear part.
    pub fn length_scale(&self) -> f64 {
        self.determinant().abs().sqrt()
    }

    /// Map a direction angle (degrees) through the linear part.
    ///
    /// The result is rounded to 1e-9 degrees so quarter turns land on
    /// exact multiples of 90.
    pub fn apply_angle(&self, degrees: f64) -> f64 {
        let (s, c) = degrees.to_radians().sin_cos();
        let (dx, dy) = self.apply_vector(c, s);
        (dy.atan2(dx).to_degrees() * 1e9).round() / 1e9
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}
