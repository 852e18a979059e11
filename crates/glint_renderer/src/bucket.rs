//! Bucket-based tile rendering.
//!
//! The image is divided into tiles (buckets), each traced with its own
//! random stream derived from the render seed and the bucket index. A
//! bucket's pixels therefore do not depend on the order buckets are
//! processed in.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::renderer::{render_pixel, ImageBuffer, RayStats, RenderConfig};
use crate::{Camera, Color, Hittable};

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner, counted from the top row
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed of this bucket's private random stream.
    pub fn seed(&self, render_seed: u64) -> u64 {
        render_seed.wrapping_add(self.index as u64)
    }
}

/// Split an image into buckets, top row first and left to right.
///
/// Edge buckets are clipped to the image, so every pixel belongs to
/// exactly one bucket.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(bucket_size as usize) {
        for x in (0..width).step_by(bucket_size as usize) {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Summed pixel radiance in row-major order, top row first
    pub pixels: Vec<Color>,
    /// Rays traced for this bucket
    pub stats: RayStats,
}

impl BucketResult {
    /// Copy the bucket's pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let rows = self.pixels.chunks(self.bucket.width as usize);
        for (local_y, row) in (0..self.bucket.height).zip(rows) {
            for (local_x, color) in (0..self.bucket.width).zip(row) {
                image.set(self.bucket.x + local_x, self.bucket.y + local_y, *color);
            }
        }
    }
}

/// Render a single bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &dyn Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> BucketResult {
    let mut rng = StdRng::seed_from_u64(bucket.seed(config.seed));
    let mut stats = RayStats::default();
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        // Camera coordinates count rows from the bottom of the image
        let j = config.image_height.saturating_sub(1 + bucket.y + local_y);
        for local_x in 0..bucket.width {
            let i = bucket.x + local_x;
            pixels.push(render_pixel(camera, world, i, j, config, &mut rng, &mut stats));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        stats,
    }
}
