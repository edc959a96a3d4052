use crate::algebra::approx_eq;
use serde::Deserialize;
use std::ops::{Add, Mul, Sub};

/// Linear RGB. Channels are not clamped until the canvas is serialized.
#[derive(Clone, Copy, Debug, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.red, other.red)
            && approx_eq(self.green, other.green)
            && approx_eq(self.blue, other.blue)
    }
}

impl Add for Color {
    type Output = Self;
    fn add(self, c: Self) -> Self {
        Self::new(self.red + c.red, self.green + c.green, self.blue + c.blue)
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, c: Self) -> Self {
        Self::new(self.red - c.red, self.green - c.green, self.blue - c.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Self;
    fn mul(self, f: f64) -> Self {
        self.map(|c| c * f)
    }
}

/// Hadamard product, used to filter light through a surface colour.
impl Mul for Color {
    type Output = Self;
    fn mul(self, c: Self) -> Self {
        Self::new(self.red * c.red, self.green * c.green, self.blue * c.blue)
    }
}

impl From<[f64; 3]> for Color {
    fn from(a: [f64; 3]) -> Self {
        Color::new(a[0], a[1], a[2])
    }
}

pub fn color_from_array<'de, D>(d: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f64; 3]>::deserialize(d)?;
    Ok(arr.into())
}
