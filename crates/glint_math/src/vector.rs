//! Geometric helpers on top of glam's `Vec3`.

use crate::Vec3;

/// Threshold below which a component counts as zero.
const NEAR_ZERO: f32 = 1e-8;

/// Returns true if every component of `v` is within `1e-8` of zero.
///
/// Used to catch degenerate scatter directions before they are normalized.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of the refractive index on the incident
/// side to the one on the transmitted side (Snell's law).
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
