//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres and axis-aligned rectangles with
//! diffuse, metallic, dielectric and emissive materials. Rendered images are
//! written as plain-text PPM or through the `image` crate.

mod bucket;
mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod perlin;
mod rect;
mod renderer;
mod sphere;
mod texture;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, DefaultCamera, PerspectiveCamera};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgb, save_image, write_ppm};
pub use perlin::{Perlin, DEFAULT_TURBULENCE_DEPTH};
pub use rect::{AxisAlignedRect, RectPlane};
pub use renderer::{
    ray_color, render, render_pixel, ImageBuffer, RayStats, RenderConfig, RenderOutput, T_MIN,
};
pub use sphere::Sphere;
pub use texture::{CheckerTexture, NoiseTexture, SolidColor, Texture};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Aabb, Color, Interval, Ray, Vec3};
