//! src/sphere.rs
//! -------------
//! Unit sphere at the object-space origin, placed in the world by an
//! affine transform.

use crate::{
    algebra::{point, Tuple},
    error::Result,
    intersection::Intersection,
    material::Material,
    matrix::Matrix,
    ray::Ray,
};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Spheres compare by identity: clones share an id, fresh spheres never do.
#[derive(Clone, Debug)]
pub struct Sphere {
    id: u64,
    transform: Matrix,
    inverse: Matrix,
    material: Material,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
            material: Material::default(),
        }
    }

    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Fails for a singular transform; the sphere keeps its old transform.
    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn world_to_object(&self, world_point: Tuple) -> Tuple {
        &self.inverse * world_point
    }

    /// Normals go back to world space through the inverse transpose so
    /// that non-uniform scaling keeps them perpendicular to the surface.
    pub fn normal_at(&self, world_point: Tuple) -> Tuple {
        let object_point = self.world_to_object(world_point);
        let object_normal = object_point - point(0.0, 0.0, 0.0);
        let mut world_normal = &self.inverse.transpose() * object_normal;
        world_normal.w = 0.0;
        world_normal.normalize()
    }

    /// Both roots of the ray/sphere quadratic, smaller first. A tangent ray
    /// yields two equal roots; a miss yields none.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let ray = ray.transform(&self.inverse);
        let sphere_to_ray = ray.origin - point(0.0, 0.0, 0.0);

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        vec![
            Intersection::new((-b - root) / (2.0 * a), self),
            Intersection::new((-b + root) / (2.0 * a), self),
        ]
    }
}
