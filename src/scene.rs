//! src/scene.rs
//! ------------
//! JSON scene files: render size, projection, materials, spheres, light.

use crate::{
    algebra::{point, point_from_array, vector_from_array, Tuple},
    camera::Camera,
    color::{color_from_array, Color},
    error::{Error, Result},
    light::PointLight,
    material::Material,
    matrix::Matrix,
    pattern::Stripe,
    renderer::{Projection, Wall},
    sphere::Sphere,
    transform::{rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform},
    world::World,
};
use log::{debug, warn};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RenderJson {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct CameraJson {
    #[serde(deserialize_with = "point_from_array")]
    pub from: Tuple,
    #[serde(deserialize_with = "point_from_array")]
    pub to: Tuple,
    #[serde(deserialize_with = "vector_from_array")]
    pub up: Tuple,
    /// Degrees.
    pub fov: f64,
}

fn default_origin() -> Tuple {
    point(0.0, 0.0, -5.0)
}

fn default_wall_z() -> f64 {
    10.0
}

fn default_wall_size() -> f64 {
    7.0
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct WallJson {
    #[serde(default = "default_origin", deserialize_with = "point_from_array")]
    pub origin: Tuple,
    #[serde(default = "default_wall_z")]
    pub z: f64,
    #[serde(default = "default_wall_size")]
    pub size: f64,
}

impl Default for WallJson {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            z: default_wall_z(),
            size: default_wall_size(),
        }
    }
}

#[derive(Deserialize)]
struct StripeJson {
    #[serde(deserialize_with = "color_from_array")]
    a: Color,
    #[serde(deserialize_with = "color_from_array")]
    b: Color,
    #[serde(default)]
    transforms: Vec<TransformJson>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PatternJson {
    Stripe(StripeJson),
}

#[derive(Deserialize)]
#[serde(default)]
struct MaterialJson {
    #[serde(deserialize_with = "color_from_array")]
    rgb: Color,
    pattern: Option<PatternJson>,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
}

impl Default for MaterialJson {
    fn default() -> Self {
        let m = Material::default();
        Self {
            rgb: m.color,
            pattern: None,
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
        }
    }
}

impl MaterialJson {
    fn into_material(self, name: &str) -> Result<Material> {
        let pattern = match self.pattern {
            None => None,
            Some(PatternJson::Stripe(s)) => Some(
                Stripe::new(s.a, s.b)
                    .with_transform(compose(&s.transforms))
                    .map_err(|e| Error::InvalidScene(format!("material '{name}' pattern: {e}")))?,
            ),
        };
        Ok(Material {
            color: self.rgb,
            pattern,
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            shininess: self.shininess,
        })
    }
}

/// One step of an object's placement. Angles are in degrees.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TransformJson {
    Translate([f64; 3]),
    Scale([f64; 3]),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    Shear([f64; 6]),
}

impl TransformJson {
    fn matrix(self) -> Matrix {
        match self {
            Self::Translate([x, y, z]) => translation(x, y, z),
            Self::Scale([x, y, z]) => scaling(x, y, z),
            Self::RotateX(deg) => rotation_x(deg.to_radians()),
            Self::RotateY(deg) => rotation_y(deg.to_radians()),
            Self::RotateZ(deg) => rotation_z(deg.to_radians()),
            Self::Shear([xy, xz, yx, yz, zx, zy]) => shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Steps are listed in the order they apply, so the product is built
/// right to left.
pub fn compose(steps: &[TransformJson]) -> Matrix {
    steps
        .iter()
        .fold(Matrix::identity(4), |acc, step| &step.matrix() * &acc)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectJson {
    Sphere { sphere: SphereDesc },
}

#[derive(Deserialize)]
struct SphereDesc {
    name: String,
    #[serde(default)]
    mat: Option<String>,
    #[serde(default)]
    transforms: Vec<TransformJson>,
}

#[derive(Deserialize)]
struct LightJson {
    #[serde(deserialize_with = "point_from_array")]
    pos: Tuple,
    #[serde(deserialize_with = "color_from_array")]
    intensity: Color,
}

#[derive(Deserialize)]
struct SceneFile {
    render: RenderJson,
    #[serde(default)]
    camera: Option<CameraJson>,
    #[serde(default)]
    wall: Option<WallJson>,
    #[serde(default)]
    materials: HashMap<String, MaterialJson>,
    #[serde(default)]
    objects: Vec<ObjectJson>,
    #[serde(default)]
    light: Option<LightJson>,
}

/// How primary rays leave the eye.
#[derive(Clone, Debug)]
pub enum View {
    Camera(Camera),
    Wall(Wall),
}

impl Projection for View {
    fn size(&self) -> (usize, usize) {
        match self {
            Self::Camera(c) => c.size(),
            Self::Wall(w) => w.size(),
        }
    }

    fn ray_for_pixel(&self, x: usize, y: usize) -> crate::ray::Ray {
        match self {
            Self::Camera(c) => Projection::ray_for_pixel(c, x, y),
            Self::Wall(w) => w.ray_for_pixel(x, y),
        }
    }
}

/// Public "loaded" scene
pub struct Scene {
    pub render: RenderJson,
    pub view: View,
    pub world: World,
    /// Object names, parallel to `world.objects()`.
    pub names: Vec<String>,
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let data = std::fs::read_to_string(path)?;
    from_str(&data)
}

pub fn from_str(data: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(data)?;
    let RenderJson { width, height } = file.render;
    if width == 0 || height == 0 {
        return Err(Error::InvalidScene(format!(
            "render size must be non-zero, got {width}x{height}"
        )));
    }

    // 1. Material library by name
    let materials = file
        .materials
        .into_iter()
        .map(|(name, m)| m.into_material(&name).map(|m| (name, m)))
        .collect::<Result<HashMap<String, Material>>>()?;

    // magenta stands out when a scene names a material it never defines
    let missing_mat = Material::default().color(Color::new(1.0, 0.0, 1.0));

    // 2. Spheres, with materials looked up by name
    let mut world = World::default();
    let mut names = Vec::new();
    for o in file.objects {
        let ObjectJson::Sphere { sphere } = o;
        let material = match &sphere.mat {
            None => Material::default(),
            Some(name) => materials.get(name).cloned().unwrap_or_else(|| {
                warn!("sphere '{}' uses unknown material '{name}'", sphere.name);
                missing_mat.clone()
            }),
        };
        let transform = compose(&sphere.transforms);
        let s = Sphere::new()
            .with_material(material)
            .with_transform(transform)
            .map_err(|e| Error::InvalidScene(format!("sphere '{}': {e}", sphere.name)))?;
        debug!("loaded sphere '{}' (id {})", sphere.name, s.id());
        world.add_object(s);
        names.push(sphere.name);
    }

    if let Some(l) = file.light {
        world.set_light(PointLight::new(l.pos, l.intensity));
    }

    // 3. Camera wins over the wall when both are given
    let view = match file.camera {
        Some(cam) => {
            let transform = view_transform(cam.from, cam.to, cam.up);
            let camera = Camera::new(width, height, cam.fov.to_radians())
                .with_transform(transform)
                .map_err(|e| Error::InvalidScene(format!("camera: {e}")))?;
            View::Camera(camera)
        }
        None => {
            let w = file.wall.unwrap_or_default();
            View::Wall(Wall {
                origin: w.origin,
                z: w.z,
                size: w.size,
                width,
                height,
            })
        }
    };

    Ok(Scene {
        render: file.render,
        view,
        world,
        names,
    })
}
