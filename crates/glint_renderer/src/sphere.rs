//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use glint_math::{Aabb, Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius gives the same surface with inward-facing normals,
    /// used for the inner wall of hollow glass. A zero radius is never hit.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        let rvec = Vec3::splat(radius.abs());
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            material,
            bbox,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        if self.radius == 0.0 {
            return None;
        }

        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;

        // Spheres carry no surface parameterization; UV stays at the origin.
        Some(HitRecord::new(
            ray,
            root,
            outward_normal,
            (0.0, 0.0),
            &self.material,
        ))
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(self.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use glint_math::{random_unit_vector, Color};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        let material = Arc::new(Material::from(Lambertian::new(Color::splat(0.5))));
        Sphere::new(center, radius, material)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::from_min(0.001))
            .expect("ray should hit the sphere");

        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!((rec.p - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere(Vec3::new(5.0, 5.0, -5.0), 1.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);

        let rec = sphere
            .hit(&ray, Interval::from_min(0.001))
            .expect("ray starts inside");

        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -5.0), -1.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere
            .hit(&ray, Interval::from_min(0.001))
            .expect("negative radius is still a surface");

        assert!((rec.t - 4.0).abs() < 1e-5);
        // Outward normal points into the sphere, so the ray sees a back face
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!(rec.normal.is_finite());

        let bbox = sphere.bounding_box().expect("spheres are bounded");
        assert_eq!(bbox.min(), Vec3::new(-1.0, -1.0, -6.0));
        assert_eq!(bbox.max(), Vec3::new(1.0, 1.0, -4.0));
    }

    #[test]
    fn test_zero_radius_never_hits() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -5.0), 0.0);
        // Straight through the center
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::NEG_Z);

        assert!(sphere.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_sphere_respects_interval() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots (4 and 6) beyond the upper bound
        assert!(sphere.hit(&ray, Interval::new(0.001, 3.0)).is_none());

        // Near root excluded, far root accepted
        let rec = sphere.hit(&ray, Interval::new(5.0, 10.0)).expect("far root");
        assert!((rec.t - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_uv_is_unset() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new_simple(Vec3::new(0.3, 0.2, 0.0), Vec3::NEG_Z);

        let rec = sphere.hit(&ray, Interval::from_min(0.001)).expect("hit");
        assert_eq!((rec.u, rec.v), (0.0, 0.0));
    }

    #[test]
    fn test_bounding_box_contains_surface() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let center = glint_math::random_vec_range(&mut rng, -50.0, 50.0);
            let radius = glint_math::gen_range(&mut rng, 0.1, 10.0);
            let sphere = sphere(center, radius);
            let bbox = sphere.bounding_box().expect("spheres are bounded");

            assert_eq!(bbox.min(), center - Vec3::splat(radius));
            assert_eq!(bbox.max(), center + Vec3::splat(radius));

            for _ in 0..200 {
                let p = center + radius * random_unit_vector(&mut rng);
                // Allow for rounding in the surface point itself
                let slack = Vec3::splat(1e-4 * (1.0 + center.abs().max_element()));
                assert!(p.cmpge(bbox.min() - slack).all() && p.cmple(bbox.max() + slack).all());
            }
        }
    }
}
