use crate::{color::Color, pattern::Stripe};

/// Phong surface parameters. A pattern, when present, replaces `color`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub pattern: Option<Stripe>,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

impl Material {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn pattern(mut self, pattern: Stripe) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn diffuse(mut self, diffuse: f64) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }
}
