//! src/transform.rs
//! ----------------
//! Affine 4x4 transforms. Compose right to left: to rotate, then scale,
//! then translate, use `translation * scaling * rotation`.

use crate::{algebra::Tuple, matrix::Matrix};

fn m4(values: [f64; 16]) -> Matrix {
    Matrix::new(4, 4, values.to_vec())
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    m4([
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    m4([
        x, 0.0, 0.0, 0.0, //
        0.0, y, 0.0, 0.0, //
        0.0, 0.0, z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_x(r: f64) -> Matrix {
    let (s, c) = r.sin_cos();
    m4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_y(r: f64) -> Matrix {
    let (s, c) = r.sin_cos();
    m4([
        c, 0.0, s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_z(r: f64) -> Matrix {
    let (s, c) = r.sin_cos();
    m4([
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Each component moves in proportion to another, e.g. `xy` moves x in
/// proportion to y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    m4([
        1.0, xy, xz, 0.0, //
        yx, 1.0, yz, 0.0, //
        zx, zy, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Moves the world so that an eye at `from` looks toward `to` with `up`
/// roughly upward.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Matrix {
    let forward = (to - from).normalize();
    let left = forward.cross(up.normalize());
    let true_up = left.cross(forward);
    let orientation = m4([
        left.x, left.y, left.z, 0.0, //
        true_up.x, true_up.y, true_up.z, 0.0, //
        -forward.x, -forward.y, -forward.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    &orientation * &translation(-from.x, -from.y, -from.z)
}
