use crate::{
    algebra::{Tuple, EPSILON},
    ray::Ray,
    sphere::Sphere,
};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Self { t, object }
    }
}

/// Total order on `t` in which `-0.0` and `0.0` tie.
fn cmp_t(a: &Intersection, b: &Intersection) -> Ordering {
    let unsigned = |t: f64| if t == 0.0 { 0.0 } else { t };
    unsigned(a.t).total_cmp(&unsigned(b.t))
}

/// Sorts ascending by `t`. Ties keep their original relative order.
pub fn intersections(mut xs: Vec<Intersection<'_>>) -> Vec<Intersection<'_>> {
    xs.sort_by(cmp_t);
    xs
}

/// Nearest intersection at or in front of the ray origin (`t >= 0`).
/// Works on unsorted input too; on equal `t` the earlier entry wins.
pub fn hit<'s, 'a>(xs: &'s [Intersection<'a>]) -> Option<&'s Intersection<'a>> {
    xs.iter()
        .filter(|i| i.t >= 0.0)
        .min_by(|a, b| cmp_t(a, b))
}

/// Shading inputs derived from a hit.
#[derive(Clone, Copy, Debug)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a Sphere,
    pub point: Tuple,
    /// `point` nudged along the normal, so shadow rays leave the surface.
    pub over_point: Tuple,
    pub eyev: Tuple,
    pub normalv: Tuple,
    pub inside: bool,
}

pub fn prepare_computations<'a>(intersection: &Intersection<'a>, ray: &Ray) -> Computations<'a> {
    let point = ray.position(intersection.t);
    let eyev = -ray.direction;
    let mut normalv = intersection.object.normal_at(point);

    let inside = normalv.dot(eyev) < 0.0;
    if inside {
        normalv = -normalv;
    }

    Computations {
        t: intersection.t,
        object: intersection.object,
        point,
        over_point: point + normalv * EPSILON,
        eyev,
        normalv,
        inside,
    }
}
