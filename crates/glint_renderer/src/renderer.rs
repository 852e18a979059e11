//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - A deterministic bucket-by-bucket render loop

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket};
use crate::{Camera, Color, Hittable, Ray, RenderError, RenderResult};
use glint_math::{gen_f32, Interval};
use rand::RngCore;

/// Smallest ray parameter accepted as a hit, to skip self-intersections.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Radiance returned by rays that escape the scene
    pub background: Color,
    /// Display gamma used when encoding 8-bit output
    pub gamma: f32,
    /// Seed for the per-bucket random streams
    pub seed: u64,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 700,
            image_height: 393,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            gamma: 2.0,
            seed: 0,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> RenderResult<()> {
        // Sample coordinates divide by (size - 1)
        if self.image_width < 2 || self.image_height < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidConfig(
                "max_depth must be at least 1".into(),
            ));
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidConfig(
                "bucket_size must be at least 1".into(),
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        if !self.background.is_finite() {
            return Err(RenderError::InvalidConfig(
                "background must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Diagnostic counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayStats {
    /// Number of `ray_color` evaluations, primary and secondary
    pub rays: u64,
}

impl AddAssign for RayStats {
    fn add_assign(&mut self, other: Self) {
        self.rays += other.rays;
    }
}

/// Compute the radiance carried back along a ray.
///
/// One-sample Monte Carlo estimate of the rendering equation: emission at the
/// hit plus attenuated radiance from a single scattered continuation.
pub fn ray_color(
    ray: &Ray,
    background: Color,
    world: &dyn Hittable,
    depth: u32,
    rng: &mut dyn RngCore,
    stats: &mut RayStats,
) -> Color {
    stats.rays += 1;

    // If we've exceeded max depth, no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::from_min(T_MIN)) else {
        return background;
    };

    let emitted = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let incoming = ray_color(&result.scattered, background, world, depth - 1, rng, stats);
            emitted + result.attenuation * incoming
        }
        None => emitted,
    }
}

/// Sum the radiance of all samples for one pixel.
///
/// `(i, j)` are the column and the row counted from the bottom of the image.
/// The result is not divided by the sample count. Images narrower or shorter
/// than two pixels are sampled as if the span were one pixel.
pub fn render_pixel(
    camera: &dyn Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    stats: &mut RayStats,
) -> Color {
    let width_span = config.image_width.saturating_sub(1).max(1) as f32;
    let height_span = config.image_height.saturating_sub(1).max(1) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f32 + gen_f32(rng)) / width_span;
        let t = (j as f32 + gen_f32(rng)) / height_span;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, config.background, world, config.max_depth, rng, stats);
    }

    pixel_color
}

/// Accumulated radiance for every pixel of an image.
///
/// Rows are stored top to bottom, each left to right. Values are sums over
/// `samples_per_pixel` samples.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), with y = 0 the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Per-pixel average radiance.
    pub fn average(&self, x: u32, y: u32) -> Color {
        self.get(x, y) / self.samples_per_pixel as f32
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Everything a finished render produces.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: ImageBuffer,
    pub stats: RayStats,
}

/// Render the entire scene to an image buffer.
///
/// Buckets are traced one after another, each with its own seeded random
/// stream, so the output depends only on the scene and the configuration.
pub fn render(
    camera: &dyn Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<RenderOutput> {
    config.validate()?;

    let buckets = generate_buckets(config.image_width, config.image_height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp, depth {} in {} buckets",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len()
    );

    let mut image = ImageBuffer::new(
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
    );
    let mut stats = RayStats::default();

    for bucket in &buckets {
        let result = render_bucket(bucket, camera, world, config);
        result.write_into(&mut image);
        stats += result.stats;
        log::debug!(
            "Bucket {}/{} done ({} rays)",
            bucket.index + 1,
            buckets.len(),
            result.stats.rays
        );
    }

    log::info!("Traced {} rays", stats.rays);
    Ok(RenderOutput { image, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AxisAlignedRect, DefaultCamera, DiffuseLight, HittableList, Lambertian, Material,
        PerspectiveCamera, Sphere,
    };
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn material(m: impl Into<Material>) -> Arc<Material> {
        Arc::new(m.into())
    }

    fn lit_scene() -> HittableList {
        let mut world = HittableList::new();
        world.add(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            material(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
        ));
        world.add(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            material(Lambertian::new(Color::new(0.7, 0.3, 0.3))),
        ));
        world.add(AxisAlignedRect::xy(
            -1.0,
            1.0,
            0.5,
            1.5,
            -1.5,
            material(DiffuseLight::new(Color::splat(4.0))),
        ));
        world
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            image_width: 16,
            image_height: 9,
            samples_per_pixel: 4,
            max_depth: 8,
            background: Color::new(0.5, 0.7, 1.0),
            bucket_size: 5,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_ray_color_depth_zero_is_black() {
        let world = lit_scene();
        let mut rng = StdRng::seed_from_u64(1);
        let mut stats = RayStats::default();

        for direction in [Vec3::NEG_Z, Vec3::Y, Vec3::new(0.3, -0.2, -1.0)] {
            let ray = Ray::new_simple(Vec3::ZERO, direction);
            let color = ray_color(&ray, Color::ONE, &world, 0, &mut rng, &mut stats);
            assert_eq!(color, Color::ZERO);
        }
    }

    #[test]
    fn test_ray_color_miss_returns_background() {
        let world = lit_scene();
        let background = Color::new(0.1, 0.2, 0.3);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        let mut rng = StdRng::seed_from_u64(2);
        let mut stats = RayStats::default();

        let color = ray_color(&ray, background, &world, 50, &mut rng, &mut stats);
        assert_eq!(color, background);
        assert_eq!(stats.rays, 1);
    }

    #[test]
    fn test_ray_color_light_is_emission_only() {
        let emit = Color::new(4.0, 3.0, 2.0);
        let mut world = HittableList::new();
        world.add(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            material(DiffuseLight::new(emit)),
        ));

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(3);
        let mut stats = RayStats::default();

        let color = ray_color(&ray, Color::ONE, &world, 50, &mut rng, &mut stats);
        assert_eq!(color, emit);
        // No recursive call was made
        assert_eq!(stats.rays, 1);
    }

    #[test]
    fn test_ray_color_single_bounce_attenuates_background() {
        // Inside a closed diffuse sphere with depth 1: the continuation ray
        // terminates at depth 0.
        let mut world = HittableList::new();
        world.add(Sphere::new(
            Vec3::ZERO,
            10.0,
            material(Lambertian::new(Color::splat(0.5))),
        ));
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);
        let mut rng = StdRng::seed_from_u64(4);
        let mut stats = RayStats::default();

        let color = ray_color(&ray, Color::ONE, &world, 1, &mut rng, &mut stats);
        assert_eq!(color, Color::ZERO);
        assert_eq!(stats.rays, 2);

        // An open scene: the bounce escapes to the background.
        let mut floor = HittableList::new();
        floor.add(AxisAlignedRect::xz(
            -10.0,
            10.0,
            -10.0,
            10.0,
            0.0,
            material(Lambertian::new(Color::splat(0.5))),
        ));
        let down = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let color = ray_color(&down, Color::ONE, &floor, 2, &mut rng, &mut stats);
        assert_eq!(color, Color::splat(0.5));
    }

    #[test]
    fn test_ray_color_is_finite() {
        let world = lit_scene();
        let mut rng = StdRng::seed_from_u64(5);
        let mut stats = RayStats::default();

        for _ in 0..2000 {
            let direction = glint_math::random_unit_vector(&mut rng);
            let ray = Ray::new_simple(Vec3::new(0.0, 0.2, 0.5), direction);
            let color = ray_color(&ray, Color::splat(0.5), &world, 50, &mut rng, &mut stats);
            assert!(color.is_finite());
            assert!(color.min_element() >= 0.0);
        }
    }

    #[test]
    fn test_render_pixel_sums_samples() {
        // Empty world: every sample returns the background
        let world = HittableList::new();
        let camera = DefaultCamera::default();
        let config = RenderConfig {
            samples_per_pixel: 7,
            ..small_config()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let mut stats = RayStats::default();

        let color = render_pixel(&camera, &world, 3, 4, &config, &mut rng, &mut stats);
        assert!((color - 7.0 * config.background).length() < 1e-5);
        assert_eq!(stats.rays, 7);
    }

    #[test]
    fn test_render_pixel_degenerate_size_is_finite() {
        let world = lit_scene();
        let camera = DefaultCamera::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut stats = RayStats::default();

        for (width, height) in [(1, 1), (0, 5), (5, 0)] {
            let config = RenderConfig {
                image_width: width,
                image_height: height,
                ..small_config()
            };
            let color = render_pixel(&camera, &world, 0, 0, &config, &mut rng, &mut stats);
            assert!(color.is_finite());
        }
    }

    #[test]
    fn test_render_is_deterministic_and_finite() {
        let world = lit_scene();
        let camera = PerspectiveCamera::new(
            Vec3::new(0.0, 0.5, 2.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            60.0,
            16.0 / 9.0,
            0.05,
            3.0,
        );
        let config = small_config();

        let first = render(&camera, &world, &config).expect("valid config");
        let second = render(&camera, &world, &config).expect("valid config");

        assert_eq!(first.image.pixels, second.image.pixels);
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.image.pixels.len(), 16 * 9);
        assert!(first.stats.rays >= 16 * 9 * 4);
        assert!(first.image.pixels.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let world = HittableList::new();
        let camera = DefaultCamera::default();

        let config = RenderConfig {
            image_width: 1,
            ..small_config()
        };
        assert!(matches!(
            render(&camera, &world, &config),
            Err(RenderError::InvalidConfig(_))
        ));

        let config = RenderConfig {
            samples_per_pixel: 0,
            ..small_config()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            gamma: 0.0,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_background_fills_image_top_to_bottom() {
        // Only the lower half of the view sees a light; rows are stored top first
        let mut world = HittableList::new();
        world.add(AxisAlignedRect::xz(
            -100.0,
            100.0,
            -100.0,
            100.0,
            -1.0,
            material(DiffuseLight::new(Color::ONE)),
        ));
        let camera = DefaultCamera::default();
        let config = RenderConfig {
            background: Color::ZERO,
            ..small_config()
        };

        let output = render(&camera, &world, &config).expect("valid config");
        let image = &output.image;

        assert_eq!(image.average(8, 0), Color::ZERO);
        assert_eq!(image.average(8, image.height - 1), Color::ONE);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "image_width": 320, "samples_per_pixel": 8 }"#)
                .expect("valid json");

        assert_eq!(config.image_width, 320);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.gamma, 2.0);
    }

    #[test]
    fn test_ray_stats_accumulate() {
        let mut total = RayStats { rays: 3 };
        total += RayStats { rays: 4 };
        assert_eq!(total.rays, 7);
    }
}
