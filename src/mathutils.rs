//! Small math helpers shared by the camera and controller systems.

use raylib::prelude::{Matrix, Vector2};
use std::ops::{Add, Mul, Sub};

/// Linear interpolation from `a` to `b` by `t`.
///
/// Works for scalars and vectors alike; `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    a + (b - a) * t
}

/// Rotate `v` counterclockwise by `angle` radians (screen space: Y-down,
/// so positive angles appear clockwise on screen).
#[cfg_attr(not(test), allow(dead_code))]
pub fn rotate(v: Vector2, angle: f32) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2 {
        x: v.x * cos - v.y * sin,
        y: v.x * sin + v.y * cos,
    }
}

/// Uniform XY scale matrix for applying zoom in clip space.
pub fn zoom_matrix(zoom: f32) -> Matrix {
    Matrix::scale(zoom, zoom, 1.0)
}

/// Rotation about the Z axis, the only rotation meaningful in 2D.
#[cfg_attr(not(test), allow(dead_code))]
pub fn rotation_matrix(angle: f32) -> Matrix {
    Matrix::rotate_z(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert!(approx_eq(lerp(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp(0.0, 10.0, 1.0), 10.0));
        assert!(approx_eq(lerp(2.0, 4.0, 0.5), 3.0));
    }

    #[test]
    fn lerp_interpolates_vectors_componentwise() {
        let a = Vector2 { x: 0.0, y: 100.0 };
        let b = Vector2 { x: 10.0, y: 0.0 };
        let mid = lerp(a, b, 0.5);
        assert!(approx_eq(mid.x, 5.0));
        assert!(approx_eq(mid.y, 50.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector2 { x: 1.0, y: 0.0 };
        let r = rotate(v, std::f32::consts::FRAC_PI_2);
        assert!(approx_eq(r.x, 0.0));
        assert!(approx_eq(r.y, 1.0));
    }

    #[test]
    fn zoom_matrix_scales_the_xy_diagonal() {
        let m = zoom_matrix(2.5);
        assert!(approx_eq(m.m0, 2.5));
        assert!(approx_eq(m.m5, 2.5));
        assert!(approx_eq(m.m10, 1.0));
        assert!(approx_eq(m.m15, 1.0));
    }

    #[test]
    fn rotation_matrix_quarter_turn_columns() {
        let m = rotation_matrix(std::f32::consts::FRAC_PI_2);
        // first basis vector maps to (0, 1)
        assert!(approx_eq(m.m0, 0.0));
        assert!(approx_eq(m.m1, 1.0));
    }
}
