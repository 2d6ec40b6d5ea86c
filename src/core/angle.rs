//! Angle - rotation stored as radians
//!
//! Equality and ordering compare the raw radian value exactly (no epsilon).

use std::f32::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn from_degrees(degrees: f32) -> Self {
        Self { radians: degrees * PI / 180.0 }
    }

    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    /// Direction of the vector `(x, y)`, measured from the positive x axis
    pub fn atan2(y: f32, x: f32) -> Self {
        Self { radians: y.atan2(x) }
    }

    pub fn to_degrees(self) -> f32 {
        self.radians * 180.0 / PI
    }

    pub const fn to_radians(self) -> f32 {
        self.radians
    }

    /// Whole degrees, whole minutes and fractional seconds.
    ///
    /// Components truncate toward zero, so negative angles yield
    /// non-positive parts.
    pub fn to_dms(self) -> (i32, i32, f32) {
        let degrees = self.to_degrees();
        let whole_degrees = degrees as i32;
        let minutes = (degrees - whole_degrees as f32) * 60.0;
        let whole_minutes = minutes as i32;
        let seconds = (minutes - whole_minutes as f32) * 60.0;
        (whole_degrees, whole_minutes, seconds)
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.radians.cos()
    }

    #[inline]
    pub fn tan(self) -> f32 {
        self.radians.tan()
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { radians: self.radians + rhs.radians }
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { radians: self.radians - rhs.radians }
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self { radians: -self.radians }
    }
}

impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { radians: self.radians * rhs }
    }
}

impl Mul<Angle> for f32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle { radians: self * rhs.radians }
    }
}

impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self { radians: self.radians / rhs }
    }
}

/// Ratio between two angles
impl Div for Angle {
    type Output = f32;
    fn div(self, rhs: Self) -> f32 {
        self.radians / rhs.radians
    }
}

impl Rem for Angle {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self { radians: self.radians % rhs.radians }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad | {}°", self.radians, self.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(90.0)]
    #[case(180.0)]
    #[case(359.9)]
    #[case(-45.0)]
    fn degrees_round_trip(#[case] degrees: f32) {
        let angle = Angle::from_degrees(degrees);
        assert_relative_eq!(angle.to_degrees(), degrees, epsilon = 1e-3);
    }

    #[test]
    fn atan2_matches_quadrants() {
        assert_relative_eq!(Angle::atan2(1.0, 0.0).to_degrees(), 90.0, epsilon = 1e-4);
        assert_relative_eq!(Angle::atan2(0.0, -1.0).to_degrees(), 180.0, epsilon = 1e-4);
        assert_eq!(Angle::atan2(0.0, 1.0), Angle::ZERO);
    }

    #[test]
    fn arithmetic_works_on_radians() {
        let a = Angle::from_radians(1.5);
        let b = Angle::from_radians(0.5);
        assert_eq!((a + b).to_radians(), 2.0);
        assert_eq!((a - b).to_radians(), 1.0);
        assert_eq!((a * 2.0).to_radians(), 3.0);
        assert_eq!((2.0 * a).to_radians(), 3.0);
        assert_eq!((a / 3.0).to_radians(), 0.5);
        assert_eq!(a / b, 3.0);
        assert_eq!((a % Angle::from_radians(1.0)).to_radians(), 0.5);
        assert!(b < a);
        assert!(a >= Angle::from_radians(1.5));
    }

    #[test]
    fn equality_is_exact() {
        let nudged = Angle::from_radians(1.0 + f32::EPSILON);
        assert_ne!(nudged, Angle::from_radians(1.0));
        assert_eq!(Angle::from_radians(0.25), Angle::from_radians(0.25));
    }

    #[test]
    fn dms_decomposition() {
        let angle = Angle::from_degrees(30.41);
        let (d, m, s) = angle.to_dms();
        assert_eq!(d, 30);
        assert_eq!(m, 24);
        assert_relative_eq!(s, 36.0, epsilon = 0.1);
        let rebuilt = d as f32 + m as f32 / 60.0 + s / 3600.0;
        assert_relative_eq!(rebuilt, angle.to_degrees(), epsilon = 1e-4);
    }

    #[test]
    fn trig_helpers() {
        let right = Angle::from_degrees(90.0);
        assert_relative_eq!(right.sin(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(right.cos(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(Angle::from_degrees(45.0).tan(), 1.0, epsilon = 1e-5);
    }
}
