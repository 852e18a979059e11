//! Axis-aligned rectangles.
//!
//! One type covers the XY, XZ and YZ planes. The rectangle lies at depth `k`
//! along the plane's normal axis and spans `[a0, a1] x [b0, b1]` on the other
//! two axes, in (x, y), (x, z) or (y, z) order respectively.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::{Aabb, Axis, Interval, Vec3};

/// Half-thickness added along the normal axis of the bounding box.
const BBOX_PADDING: f32 = 0.0001;

/// Orientation of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectPlane {
    XY,
    XZ,
    YZ,
}

impl RectPlane {
    /// The in-plane axes followed by the normal axis.
    fn axes(self) -> (Axis, Axis, Axis) {
        match self {
            RectPlane::XY => (Axis::X, Axis::Y, Axis::Z),
            RectPlane::XZ => (Axis::X, Axis::Z, Axis::Y),
            RectPlane::YZ => (Axis::Y, Axis::Z, Axis::X),
        }
    }
}

/// An axis-aligned rectangle with zero thickness.
#[derive(Debug, Clone)]
pub struct AxisAlignedRect {
    plane: RectPlane,
    a: Interval,
    b: Interval,
    k: f32,
    material: Arc<Material>,
}

impl AxisAlignedRect {
    /// Rectangle on `plane` at depth `k`. Bounds may be given in any order.
    pub fn new(
        plane: RectPlane,
        (a0, a1): (f32, f32),
        (b0, b1): (f32, f32),
        k: f32,
        material: Arc<Material>,
    ) -> Self {
        Self {
            plane,
            a: Interval::new(a0.min(a1), a0.max(a1)),
            b: Interval::new(b0.min(b1), b0.max(b1)),
            k,
            material,
        }
    }

    /// Rectangle `[x0, x1] x [y0, y1]` in the plane `z = k`.
    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(RectPlane::XY, (x0, x1), (y0, y1), k, material)
    }

    /// Rectangle `[x0, x1] x [z0, z1]` in the plane `y = k`.
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(RectPlane::XZ, (x0, x1), (z0, z1), k, material)
    }

    /// Rectangle `[y0, y1] x [z0, z1]` in the plane `x = k`.
    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(RectPlane::YZ, (y0, y1), (z0, z1), k, material)
    }

    pub fn plane(&self) -> RectPlane {
        self.plane
    }

    fn point(&self, a: f32, b: f32, k: f32) -> Vec3 {
        let (axis_a, axis_b, axis_k) = self.plane.axes();
        let mut p = Vec3::ZERO;
        p[axis_a.index()] = a;
        p[axis_b.index()] = b;
        p[axis_k.index()] = k;
        p
    }
}

/// Position of `x` within `span`, in `[0, 1]`. A degenerate span maps to 0.
fn span_fraction(span: &Interval, x: f32) -> f32 {
    let size = span.size();
    if size > 0.0 {
        (x - span.min) / size
    } else {
        0.0
    }
}

impl Hittable for AxisAlignedRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let (axis_a, axis_b, axis_k) = self.plane.axes();
        let origin = ray.origin();
        let direction = ray.direction();

        let t = (self.k - origin[axis_k.index()]) / direction[axis_k.index()];
        // A ray parallel to the plane gives an infinite or NaN t
        if !t.is_finite() || !ray_t.contains(t) {
            return None;
        }

        let a = origin[axis_a.index()] + t * direction[axis_a.index()];
        let b = origin[axis_b.index()] + t * direction[axis_b.index()];
        if !self.a.contains(a) || !self.b.contains(b) {
            return None;
        }

        let uv = (span_fraction(&self.a, a), span_fraction(&self.b, b));
        let outward_normal = self.point(0.0, 0.0, 1.0);

        Some(HitRecord::new(ray, t, outward_normal, uv, &self.material))
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(Aabb::from_points(
            self.point(self.a.min, self.b.min, self.k - BBOX_PADDING),
            self.point(self.a.max, self.b.max, self.k + BBOX_PADDING),
        ))
    }
}
