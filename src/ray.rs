use crate::{algebra::Tuple, matrix::Matrix};

/// Origin is a point, direction a vector (not necessarily unit length).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    pub fn transform(&self, m: &Matrix) -> Self {
        Self::new(m * self.origin, m * self.direction)
    }
}
