use crate::{
    algebra::{point, Tuple},
    color::Color,
    intersection::{hit, intersections, prepare_computations, Computations, Intersection},
    light::{lighting, PointLight},
    material::Material,
    ray::Ray,
    sphere::Sphere,
    transform::scaling,
};

/// Spheres plus at most one light. Built up front, then only read while
/// rendering.
#[derive(Clone, Debug, Default)]
pub struct World {
    objects: Vec<Sphere>,
    light: Option<PointLight>,
}

impl World {
    /// Two concentric spheres lit by a white light at the origin.
    pub fn default_scene() -> Self {
        let outer = Sphere::new().with_material(
            Material::default()
                .color(Color::new(0.8, 1.0, 0.6))
                .diffuse(0.7)
                .specular(0.2),
        );
        let inner = Sphere::new()
            .with_transform(scaling(0.5, 0.5, 0.5))
            .expect("uniform scaling is invertible");

        let mut world = Self::default();
        world.set_light(PointLight::new(point(0.0, 0.0, 0.0), Color::white()));
        world.add_object(outer);
        world.add_object(inner);
        world
    }

    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    pub fn add_object(&mut self, sphere: Sphere) {
        self.objects.push(sphere);
    }

    pub fn light(&self) -> Option<&PointLight> {
        self.light.as_ref()
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = Some(light);
    }

    pub fn clear_light(&mut self) {
        self.light = None;
    }

    /// Every intersection with every object, ascending by `t`.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        intersections(self.objects.iter().flat_map(|o| o.intersect(ray)).collect())
    }

    /// Black when the world has no light.
    pub fn shade_hit(&self, comps: &Computations) -> Color {
        match &self.light {
            Some(light) => lighting(
                comps.object.material(),
                comps.object,
                light,
                comps.point,
                comps.eyev,
                comps.normalv,
                self.is_shadowed(comps.over_point),
            ),
            None => Color::black(),
        }
    }

    /// Whether some object sits between `point` and the light. Nothing is
    /// shadowed in a world without a light.
    pub fn is_shadowed(&self, point: Tuple) -> bool {
        let Some(light) = &self.light else {
            return false;
        };
        let to_light = light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize());
        let xs = self.intersect(&ray);
        hit(&xs).map_or(false, |h| h.t < distance)
    }

    pub fn color_at(&self, ray: &Ray) -> Color {
        let xs = self.intersect(ray);
        match hit(&xs) {
            Some(i) => self.shade_hit(&prepare_computations(i, ray)),
            None => Color::black(),
        }
    }
}
