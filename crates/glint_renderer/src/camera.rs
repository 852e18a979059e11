//! Cameras for ray generation.
//!
//! A camera maps normalized image-plane coordinates `(s, t)` in `[0, 1]`,
//! with `(0, 0)` at the lower-left corner, to a world-space ray.

use glint_math::{gen_range, random_in_unit_disk, Ray, Vec3};
use rand::RngCore;

/// Anything that can turn image-plane coordinates into primary rays.
pub trait Camera: Send + Sync {
    /// Generate the ray through image-plane position `(s, t)`.
    fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray;
}

/// Perspective camera with a thin lens for depth of field.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
    time0: f32,
    time1: f32,
}

impl PerspectiveCamera {
    /// Create a camera looking from `look_from` towards `look_at`.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aperture`: lens diameter, 0 for a pinhole
    /// - `focus_dist`: distance to the plane in perfect focus
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
            time0: 0.0,
            time1: 0.0,
        }
    }

    /// Set the shutter interval rays are stamped with.
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal camera frame `(u, v, w)`; `w` points away from the view.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

impl Camera for PerspectiveCamera {
    fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let time = if self.time1 > self.time0 {
            gen_range(rng, self.time0, self.time1)
        } else {
            self.time0
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
            time,
        )
    }
}

/// Fixed pinhole camera at the origin looking down `-z`.
#[derive(Debug, Clone)]
pub struct DefaultCamera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl DefaultCamera {
    pub const ASPECT_RATIO: f32 = 16.0 / 9.0;
    pub const FOCAL_LENGTH: f32 = 0.4;
    const VIEWPORT_HEIGHT: f32 = 2.0;

    pub fn new(aspect_ratio: f32, focal_length: f32) -> Self {
        let viewport_width = aspect_ratio * Self::VIEWPORT_HEIGHT;

        let origin = Vec3::ZERO;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, Self::VIEWPORT_HEIGHT, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }
}

impl Default for DefaultCamera {
    fn default() -> Self {
        Self::new(Self::ASPECT_RATIO, Self::FOCAL_LENGTH)
    }
}

impl Camera for DefaultCamera {
    fn get_ray(&self, s: f32, t: f32, _rng: &mut dyn RngCore) -> Ray {
        Ray::new_simple(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }
}
