// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod aabb;
mod interval;
mod ray;
pub mod sampling;
pub mod transform;
mod vector;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
pub use sampling::{
    gen_f32, gen_range, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
    random_vec, random_vec_range,
};
pub use transform::Axis;
pub use vector::{near_zero, reflect, refract};

/// RGB color in linear space. Shares storage with `Vec3`.
pub type Color = Vec3;
