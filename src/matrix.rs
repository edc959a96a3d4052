//! src/matrix.rs
//! -------------
//! Dense row-major matrices. Any size is representable, but the renderer
//! only ever builds 4x4 transforms; smaller ones appear as submatrices
//! during cofactor expansion.

use crate::{
    algebra::{approx_eq, Tuple},
    error::{Error, Result},
};
use std::ops::Mul;

#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Panics if `values` does not hold exactly `rows * cols` entries.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "{rows}x{cols} matrix needs {} values",
            rows * cols
        );
        Self { rows, cols, values }
    }

    pub fn identity(n: usize) -> Self {
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            values[i * n + i] = 1.0;
        }
        Self::new(n, n, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.at(r, c));
            }
        }
        Self::new(self.cols, self.rows, values)
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> f64 {
        assert_eq!(self.rows, self.cols, "determinant of a non-square matrix");
        match self.rows {
            1 => self.values[0],
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            n => (0..n).map(|c| self.at(0, c) * self.cofactor(0, c)).sum::<f64>(),
        }
    }

    /// Copy of the matrix with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        let mut values = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.cols).filter(|&c| c != col) {
                values.push(self.at(r, c));
            }
        }
        Self::new(self.rows - 1, self.cols - 1, values)
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Adjugate over determinant. Writing `cofactor(r, c)` into `[c][r]`
    /// transposes the cofactor matrix on the fly.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(Error::NotInvertible { determinant });
        }

        let mut values = vec![0.0; self.values.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                values[c * self.cols + r] = self.cofactor(r, c) / determinant;
            }
        }
        Ok(Self::new(self.rows, self.cols, values))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, rhs.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut values: Vec<f64> = Vec::with_capacity(self.rows * rhs.cols);
        for r in 0..self.rows {
            for c in 0..rhs.cols {
                values.push((0..self.cols).map(|k| self.at(r, k) * rhs.at(k, c)).sum());
            }
        }
        Matrix::new(self.rows, rhs.cols, values)
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

/// The tuple is treated as a 4x1 column.
impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        assert!(
            self.rows == 4 && self.cols == 4,
            "only a 4x4 matrix can transform a tuple, got {}x{}",
            self.rows,
            self.cols
        );
        let row = |r: usize| {
            self.at(r, 0) * t.x + self.at(r, 1) * t.y + self.at(r, 2) * t.z + self.at(r, 3) * t.w
        };
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;
    fn mul(self, t: Tuple) -> Tuple {
        &self * t
    }
}
