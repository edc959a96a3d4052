//! src/renderer.rs
//! ---------------
//! Per-pixel ray casting into a canvas. Rows are independent, so they are
//! filled in parallel; each worker owns exactly one row slice.

use crate::{
    algebra::{point, Tuple},
    camera::Camera,
    canvas::Canvas,
    ray::Ray,
    world::World,
};
use log::debug;
use rand::Rng;
use rayon::prelude::*;

/// Maps canvas pixels to primary rays.
pub trait Projection: Sync {
    /// `(width, height)` of the canvas this projection fills.
    fn size(&self) -> (usize, usize);

    fn ray_for_pixel(&self, x: usize, y: usize) -> Ray;
}

impl Projection for Camera {
    fn size(&self) -> (usize, usize) {
        (self.hsize(), self.vsize())
    }

    fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        Camera::ray_for_pixel(self, x, y)
    }
}

/// Rays from a fixed origin toward points on a square wall facing -z.
#[derive(Clone, Copy, Debug)]
pub struct Wall {
    pub origin: Tuple,
    pub z: f64,
    pub size: f64,
    pub width: usize,
    pub height: usize,
}

impl Wall {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            origin: point(0.0, 0.0, -5.0),
            z: 10.0,
            size: 7.0,
            width,
            height,
        }
    }

    /// Panics on a zero-width wall.
    fn pixel_size(&self) -> f64 {
        assert!(self.width > 0, "wall needs a non-zero width");
        self.size / self.width as f64
    }
}

impl Projection for Wall {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let pixel_size = self.pixel_size();
        let world_x = -self.size / 2.0 + pixel_size * x as f64;
        let world_y = pixel_size * self.height as f64 / 2.0 - pixel_size * y as f64;
        let target = point(world_x, world_y, self.z);
        Ray::new(self.origin, (target - self.origin).normalize())
    }
}

pub fn render(projection: &impl Projection, world: &World) -> Canvas {
    render_with_progress(projection, world, || {})
}

/// `on_row` runs once per finished row, from whichever worker finished it.
pub fn render_with_progress<F>(projection: &impl Projection, world: &World, on_row: F) -> Canvas
where
    F: Fn() + Sync,
{
    let (width, height) = projection.size();
    debug!("rendering {width}x{height} over {} objects", world.objects().len());

    let mut canvas = Canvas::new(width, height);
    canvas.par_rows_mut().enumerate().for_each(|(y, row)| {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = world.color_at(&projection.ray_for_pixel(x, y));
        }
        on_row();
    });
    canvas
}

pub fn render_image_name(w: usize, h: usize, ext: &str) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("renders/render_{w}x{h}_{suf}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algebra::vector,
        color::Color,
        light::PointLight,
        material::Material,
        sphere::Sphere,
        transform::view_transform,
    };
    use std::f64::consts::PI;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn lit_default_scene() -> World {
        let mut w = World::default_scene();
        w.set_light(PointLight::new(point(-10.0, 10.0, -10.0), Color::white()));
        w
    }

    #[test]
    fn camera_render_of_default_scene() {
        let w = lit_default_scene();
        let c = Camera::new(11, 11, PI / 2.0)
            .with_transform(view_transform(
                point(0.0, 0.0, -5.0),
                point(0.0, 0.0, 0.0),
                vector(0.0, 1.0, 0.0),
            ))
            .unwrap();
        let image = render(&c, &w);
        assert_eq!(image.pixel_at(5, 5), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn wall_rays_start_at_origin_and_hit_the_wall() {
        let wall = Wall::new(100, 100);
        let r = wall.ray_for_pixel(0, 0);
        assert_eq!(r.origin, point(0.0, 0.0, -5.0));
        assert!((r.direction.magnitude() - 1.0).abs() < 1e-9);

        // t at which the ray reaches the wall plane
        let t = (wall.z - r.origin.z) / r.direction.z;
        assert_eq!(r.position(t), point(-3.5, 3.5, 10.0));

        let r = wall.ray_for_pixel(50, 50);
        assert_eq!(r.direction, vector(0.0, 0.0, 1.0));
    }

    #[test]
    fn wall_render_shows_a_silhouette() {
        let mut w = World::default();
        w.add_object(Sphere::new().with_material(Material::default().color(Color::new(1.0, 0.2, 1.0))));
        w.set_light(PointLight::new(point(-10.0, 10.0, -10.0), Color::white()));

        let canvas = render(&Wall::new(20, 20), &w);
        assert_ne!(canvas.pixel_at(10, 10), Color::black());
        assert_eq!(canvas.pixel_at(0, 0), Color::black());
        assert_eq!(canvas.pixel_at(19, 19), Color::black());
    }

    #[test]
    fn progress_is_reported_once_per_row() {
        let rows = AtomicUsize::new(0);
        let canvas = render_with_progress(&Wall::new(8, 5), &World::default_scene(), || {
            rows.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(rows.load(Ordering::Relaxed), 5);
        assert_eq!((canvas.width(), canvas.height()), (8, 5));
    }

    #[test]
    fn parallel_render_matches_pixel_by_pixel() {
        let w = lit_default_scene();
        let wall = Wall::new(16, 12);
        let canvas = render(&wall, &w);
        for y in 0..12 {
            for x in 0..16 {
                assert_eq!(canvas.pixel_at(x, y), w.color_at(&wall.ray_for_pixel(x, y)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "non-zero width")]
    fn zero_width_wall_panics() {
        Wall::new(0, 4).ray_for_pixel(0, 0);
    }

    #[test]
    fn image_names_carry_size_and_extension() {
        let name = render_image_name(320, 200, "ppm");
        assert!(name.starts_with("renders/render_320x200_"));
        assert!(name.ends_with(".ppm"));
        assert_eq!(name.len(), "renders/render_320x200_".len() + 6 + ".ppm".len());
    }
}
