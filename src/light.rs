use crate::{algebra::Tuple, color::Color, material::Material, sphere::Sphere};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self { position, intensity }
    }
}

/// Phong reflection: ambient + diffuse + specular, unclamped. A point in
/// shadow gets the ambient term only. `object` places the material's
/// pattern, if it has one.
pub fn lighting(
    material: &Material,
    object: &Sphere,
    light: &PointLight,
    point: Tuple,
    eyev: Tuple,
    normalv: Tuple,
    in_shadow: bool,
) -> Color {
    let surface = match &material.pattern {
        Some(pattern) => pattern.stripe_at_object(object, point),
        None => material.color,
    };
    let effective_color = surface * light.intensity;
    let lightv = (light.position - point).normalize();
    let ambient = effective_color * material.ambient;

    // cosine between light and normal; negative means the light is behind the surface
    let light_dot_normal = lightv.dot(normalv);
    if in_shadow || light_dot_normal < 0.0 {
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflectv = (-lightv).reflect(normalv);
    let reflect_dot_eye = reflectv.dot(eyev);
    let specular = if reflect_dot_eye <= 0.0 {
        Color::black()
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}
