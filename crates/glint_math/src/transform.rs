// Affine point transforms.
//
// Scene builders place and pose points with these helpers. Rotations take
// degrees and turn counter-clockwise when looking down the positive axis
// towards the origin. Built on glam's Mat3 rotation constructors.

use glam::{Mat3, Vec3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis into a `Vec3` (0=X, 1=Y, 2=Z).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Rotation matrix about this axis.
    pub fn rotation(self, degrees: f32) -> Mat3 {
        let angle = degrees.to_radians();
        match self {
            Axis::X => Mat3::from_rotation_x(angle),
            Axis::Y => Mat3::from_rotation_y(angle),
            Axis::Z => Mat3::from_rotation_z(angle),
        }
    }
}

/// Move a point by `(dx, dy, dz)`.
pub fn translate(point: Vec3, dx: f32, dy: f32, dz: f32) -> Vec3 {
    point + Vec3::new(dx, dy, dz)
}

/// Move a point by `d` along every axis.
pub fn uniform_translate(point: Vec3, d: f32) -> Vec3 {
    point + Vec3::splat(d)
}

/// Scale a point per axis about the origin.
pub fn scale(point: Vec3, a: f32, b: f32, c: f32) -> Vec3 {
    point * Vec3::new(a, b, c)
}

/// Scale a point uniformly about the origin.
pub fn uniform_scale(point: Vec3, s: f32) -> Vec3 {
    point * s
}

pub fn rotate_x(point: Vec3, degrees: f32) -> Vec3 {
    rotate(point, degrees, Axis::X)
}

pub fn rotate_y(point: Vec3, degrees: f32) -> Vec3 {
    rotate(point, degrees, Axis::Y)
}

pub fn rotate_z(point: Vec3, degrees: f32) -> Vec3 {
    rotate(point, degrees, Axis::Z)
}

/// Rotate a point about the origin around `axis`.
pub fn rotate(point: Vec3, degrees: f32, axis: Axis) -> Vec3 {
    axis.rotation(degrees) * point
}

/// Rotate a point around an axis-parallel line through `pivot`.
pub fn rotate_about_point(point: Vec3, pivot: Vec3, degrees: f32, axis: Axis) -> Vec3 {
    rotate(point - pivot, degrees, axis) + pivot
}
