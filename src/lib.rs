//! Ray casting over transformed unit spheres with Phong shading, written
//! out as plain-text PPM.

pub mod algebra;
pub mod camera;
pub mod canvas;
pub mod color;
pub mod error;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod pattern;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
pub mod transform;
pub mod world;

pub use error::{Error, Result};
