//! Ray casting utilities for picking
//!
//! Rays are built by `Camera::ray_from_ndc`; this module holds the ray type
//! and the intersection tests the picker needs.

use super::math::{wrap_angle, Vec3};

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get point at distance t along ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Find the intersection of a ray with a plane.
///
/// Returns the distance along the ray to the intersection point,
/// or None if the ray is parallel to the plane or intersection is behind ray origin.
pub fn ray_plane_intersection(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() < 0.0001 {
        return None; // Ray parallel to plane
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None; // Intersection behind ray origin
    }

    Some(t)
}

/// Intersect a ray with a flat circular sector lying in a horizontal plane.
///
/// The sector's local angle θ maps to the world offset `(cos θ, 0, -sin θ) * radius`,
/// so angles grow counter-clockwise when seen from above. The sector covers
/// `[start, start + arc]`. Both faces are hit. Returns the ray distance.
pub fn ray_sector_intersection(
    ray: &Ray,
    center: Vec3,
    radius: f32,
    start: f32,
    arc: f32,
) -> Option<f32> {
    if arc <= 0.0 || radius <= 0.0 {
        return None;
    }

    let t = ray_plane_intersection(ray, center, Vec3::UP)?;
    let local = ray.at(t) - center;
    let dist = (local.x * local.x + local.z * local.z).sqrt();
    if dist > radius {
        return None;
    }
    if arc >= std::f32::consts::TAU || dist < 1e-6 {
        return Some(t);
    }

    let angle = (-local.z).atan2(local.x);
    let rel = wrap_angle(angle - start);
    if rel <= arc {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn down_at(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 5.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 0.001);
        assert!(p.y.abs() < 0.001);
    }

    #[test]
    fn test_ray_plane_intersection() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray_plane_intersection(&ray, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!((t.unwrap() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(ray_plane_intersection(&ray, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn test_sector_quarter_hit_and_miss() {
        // Quarter sector starting at π/2 covers the -Z, -X quadrant
        let center = Vec3::ZERO;
        let hit = ray_sector_intersection(&down_at(-0.3, -0.3), center, 1.0, FRAC_PI_2, FRAC_PI_2);
        assert!((hit.unwrap() - 5.0).abs() < 1e-4);

        let miss = ray_sector_intersection(&down_at(0.3, -0.3), center, 1.0, FRAC_PI_2, FRAC_PI_2);
        assert!(miss.is_none());
    }

    #[test]
    fn test_sector_wraps_past_full_turn() {
        // Starts at 3π/2 (+Z direction) and runs a full half turn, wrapping through 0
        let hit = ray_sector_intersection(&down_at(0.5, 0.0), Vec3::ZERO, 1.0, 1.5 * PI, PI);
        assert!(hit.is_some());
        let miss = ray_sector_intersection(&down_at(-0.5, 0.0), Vec3::ZERO, 1.0, 1.5 * PI, PI);
        assert!(miss.is_none());
    }

    #[test]
    fn test_sector_outside_radius() {
        assert!(ray_sector_intersection(&down_at(2.0, 0.0), Vec3::ZERO, 1.0, 0.0, TAU).is_none());
    }

    #[test]
    fn test_empty_sector_never_hit() {
        let hit = ray_sector_intersection(&down_at(0.0, -0.2), Vec3::ZERO, 1.0, FRAC_PI_2, 0.0);
        assert!(hit.is_none());
    }
}
