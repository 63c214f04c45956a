//! Minimal 2D geometry types for the contour engine crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(rhs, 0)`.
    /// Positive when `rhs` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn abs_diff_eq(self, rhs: Vec2, eps: f32) -> bool {
        (self.x - rhs.x).abs() <= eps && (self.y - rhs.y).abs() <= eps
    }
}

/// Signed area of the triangle `abc`. Negative for clockwise winding.
#[inline]
pub fn triangle_signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    0.5 * (b - a).cross(c - a)
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_triangle_has_negative_area() {
        let a = Vec2::ZERO;
        let b = Vec2::new(0.0, 1.0);
        let c = Vec2::new(1.0, 0.0);
        assert_eq!(triangle_signed_area(a, b, c), -0.5);
        assert_eq!(triangle_signed_area(a, c, b), 0.5);
    }

    proptest::proptest! {
        // Swapping two vertices flips the winding
        #[test]
        fn swapping_vertices_negates_area(
            a in proptest::prelude::any::<Vec2>(),
            b in proptest::prelude::any::<Vec2>(),
            c in proptest::prelude::any::<Vec2>(),
        ) {
            let fwd = triangle_signed_area(a, b, c);
            let rev = triangle_signed_area(a, c, b);
            // exact even for extreme inputs; NaN stays NaN
            proptest::prop_assert!((fwd.is_nan() && rev.is_nan()) || fwd == -rev);
        }
    }
}
