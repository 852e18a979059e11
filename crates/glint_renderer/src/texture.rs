//! Procedural textures mapping a surface location to a color.
//!
//! Textures are a closed set of variants dispatched with a `match`. They are
//! pure functions of `(u, v, p)` and are shared between materials by `Arc`.

use std::sync::Arc;

use crate::perlin::{Perlin, DEFAULT_TURBULENCE_DEPTH};
use glint_math::{Color, Vec3};

/// A spatially varying color.
#[derive(Debug, Clone)]
pub enum Texture {
    Solid(SolidColor),
    Checker(CheckerTexture),
    Noise(NoiseTexture),
}

impl Texture {
    /// Shorthand for a shared constant-color texture.
    pub fn solid(color: Color) -> Arc<Texture> {
        Arc::new(Texture::Solid(SolidColor::new(color)))
    }

    /// Color of the texture at surface coordinates `(u, v)` and point `p`.
    pub fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        match self {
            Texture::Solid(t) => t.value(),
            Texture::Checker(t) => t.value(u, v, p),
            Texture::Noise(t) => t.value(p),
        }
    }
}

impl From<SolidColor> for Texture {
    fn from(t: SolidColor) -> Self {
        Texture::Solid(t)
    }
}

impl From<CheckerTexture> for Texture {
    fn from(t: CheckerTexture) -> Self {
        Texture::Checker(t)
    }
}

impl From<NoiseTexture> for Texture {
    fn from(t: NoiseTexture) -> Self {
        Texture::Noise(t)
    }
}

/// Constant color everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn from_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(Color::new(red, green, blue))
    }

    #[inline]
    fn value(&self) -> Color {
        self.color
    }
}

/// Frequency of the checker pattern along each axis.
const CHECKER_FREQUENCY: f32 = 10.0;

/// Solid 3D checkerboard alternating between two child textures.
///
/// The cell is chosen from the sign of `sin(10x)·sin(10y)·sin(10z)`, so the
/// pattern depends on the hit point only and not on UV.
#[derive(Debug, Clone)]
pub struct CheckerTexture {
    even: Arc<Texture>,
    odd: Arc<Texture>,
}

impl CheckerTexture {
    pub fn new(even: Arc<Texture>, odd: Arc<Texture>) -> Self {
        Self { even, odd }
    }

    /// Checkerboard of two constant colors.
    pub fn from_colors(even: Color, odd: Color) -> Self {
        Self::new(Texture::solid(even), Texture::solid(odd))
    }

    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let sines = (CHECKER_FREQUENCY * p.x).sin()
            * (CHECKER_FREQUENCY * p.y).sin()
            * (CHECKER_FREQUENCY * p.z).sin();

        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

/// Marble-like gray pattern: `0.5·(1 + sin(scale·z + 10·turb(p)))`.
#[derive(Debug, Clone)]
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(noise: Perlin, scale: f32) -> Self {
        Self { noise, scale }
    }

    /// Noise texture with a freshly seeded generator.
    pub fn with_seed(scale: f32, seed: u64) -> Self {
        Self::new(Perlin::with_seed(seed), scale)
    }

    fn value(&self, p: Vec3) -> Color {
        let phase = self.scale * p.z + 10.0 * self.noise.turb(p, DEFAULT_TURBULENCE_DEPTH);
        Color::ONE * 0.5 * (1.0 + phase.sin())
    }
}
