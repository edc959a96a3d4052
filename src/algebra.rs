//! src/algebra.rs
//! --------------
//! Homogeneous 4-component tuples. `w == 1` is a point, `w == 0` a vector.

use serde::Deserialize;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance used by every approximate comparison in the crate.
pub const EPSILON: f64 = 1e-5;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Clone, Copy, Debug)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

pub fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

pub fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy of the tuple.
    ///
    /// A zero-length tuple has no direction; it is returned unchanged
    /// instead of being divided into NaNs. Use [`Tuple::try_normalize`]
    /// to detect that case.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(self)
    }

    pub fn try_normalize(self) -> Option<Self> {
        let m = self.magnitude();
        if m == 0.0 {
            None
        } else {
            Some(self / m)
        }
    }

    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z + self.w * v.w
    }

    /// Only meaningful for vectors; the result is always a vector.
    pub fn cross(self, v: Self) -> Self {
        vector(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Reflect `self` around `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * 2.0 * self.dot(normal)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z, self.w + v.w)
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z, self.w - v.w)
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, f: f64) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f, self.w * f)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;
    fn div(self, f: f64) -> Self {
        Self::new(self.x / f, self.y / f, self.z / f, self.w / f)
    }
}

/* Serde helpers so scene files can spell points and vectors as `[x, y, z]` */
pub fn point_from_array<'de, D>(d: D) -> Result<Tuple, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let [x, y, z] = <[f64; 3]>::deserialize(d)?;
    Ok(point(x, y, z))
}

pub fn vector_from_array<'de, D>(d: D) -> Result<Tuple, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let [x, y, z] = <[f64; 3]>::deserialize(d)?;
    Ok(vector(x, y, z))
}
