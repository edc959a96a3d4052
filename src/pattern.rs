//! src/pattern.rs
//! --------------
//! Stripes along pattern-space x, placed on a sphere by the sphere's own
//! transform and then the pattern's.

use crate::{algebra::Tuple, color::Color, error::Result, matrix::Matrix, sphere::Sphere};

#[derive(Clone, Debug, PartialEq)]
pub struct Stripe {
    pub a: Color,
    pub b: Color,
    transform: Matrix,
    inverse: Matrix,
}

impl Stripe {
    pub fn new(a: Color, b: Color) -> Self {
        Self {
            a,
            b,
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
        }
    }

    /// Fails for a singular transform.
    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(self)
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// `a` on stripes where `floor(x)` is even, `b` where it is odd.
    pub fn stripe_at(&self, pattern_point: Tuple) -> Color {
        if pattern_point.x.floor().rem_euclid(2.0) == 0.0 {
            self.a
        } else {
            self.b
        }
    }

    pub fn stripe_at_object(&self, object: &Sphere, world_point: Tuple) -> Color {
        let object_point = object.world_to_object(world_point);
        self.stripe_at(&self.inverse * object_point)
    }
}
