//! Planar vector type used for particle positions.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector. Screen convention: `y` grows downward, so gravity is positive `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean norm.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Componentwise clamp into the box `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Vec2 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self { Vec2 { x, y } }
}

impl<F: Float> From<Vec2<F>> for (F, F) {
    fn from(v: Vec2<F>) -> Self { (v.x, v.y) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(1.0f64, 2.0);
        let b = Vec2::new(4.0f64, 6.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_is_componentwise() {
        let min = Vec2::new(5.0f64, 5.0);
        let max = Vec2::new(795.0f64, 595.0);
        let c = Vec2::new(-10.0f64, 700.0).clamp(min, max);
        assert_eq!(c, Vec2::new(5.0, 595.0));

        let inside = Vec2::new(100.0f64, 200.0);
        assert_eq!(inside.clamp(min, max), inside);
    }

    #[test]
    fn tuple_conversions() {
        let v: Vec2<f64> = (400.0, 50.0).into();
        assert_eq!(v, Vec2::new(400.0, 50.0));
        let t: (f64, f64) = v.into();
        assert_eq!(t, (400.0, 50.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::new(1.0f32, 1.0);
        v += Vec2::new(2.0, 3.0);
        assert_eq!(v, Vec2::new(3.0, 4.0));
        v -= Vec2::new(3.0, 4.0);
        assert_eq!(v, Vec2::zero());
    }
}
