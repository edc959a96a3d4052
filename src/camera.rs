//! src/camera.rs
//! -------------
//! Pinhole camera one unit in front of a canvas, oriented by a view
//! transform (see `transform::view_transform`).

use crate::{
    algebra::point,
    error::Result,
    matrix::Matrix,
    ray::Ray,
};

#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix,
    inverse: Matrix,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// `field_of_view` is in radians.
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        }
    }

    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(self)
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray from the eye through the centre of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;

        // the camera looks toward -z, so +x is to the left
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let pixel = &self.inverse * point(world_x, world_y, -1.0);
        let origin = &self.inverse * point(0.0, 0.0, 0.0);
        Ray::new(origin, (pixel - origin).normalize())
    }
}
