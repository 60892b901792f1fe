//! Orbit camera with perspective projection
//!
//! The camera orbits a target point. Left-drag changes azimuth/elevation,
//! the scroll wheel changes distance. Basis vectors are recomputed whenever
//! the orbit parameters change, and both projection directions
//! (world -> screen, screen -> ray) are derived from the same basis.

use super::math::Vec3;
use super::ray::Ray;
use crate::ui::Rect;

/// Keep the camera off the poles so the basis stays well defined
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Clone, Debug)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,   // Horizontal angle (radians)
    pub elevation: f32, // Vertical angle (radians)
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    // Computed
    pub position: Vec3,
    pub basis_x: Vec3, // Right
    pub basis_y: Vec3, // Up
    pub basis_z: Vec3, // Forward
}

impl Camera {
    /// Create a camera at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3, fov_y_deg: f32, near: f32, far: f32) -> Self {
        let offset = position - target;
        let distance = offset.len().max(1e-3);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let azimuth = offset.x.atan2(offset.z);

        let mut cam = Self {
            target,
            distance,
            azimuth,
            elevation: elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION),
            fov_y: fov_y_deg.to_radians(),
            near,
            far,
            min_distance: near * 2.0,
            max_distance: far * 0.5,
            position,
            basis_x: Vec3::new(1.0, 0.0, 0.0),
            basis_y: Vec3::UP,
            basis_z: Vec3::new(0.0, 0.0, -1.0),
        };
        cam.update_basis();
        cam
    }

    /// Recompute position and basis from the orbit parameters
    pub fn update_basis(&mut self) {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();

        let offset = Vec3::new(cos_e * sin_a, sin_e, cos_e * cos_a);
        self.position = self.target + offset * self.distance;

        self.basis_z = (-offset).normalize();
        self.basis_x = self.basis_z.cross(Vec3::UP).normalize();
        self.basis_y = self.basis_x.cross(self.basis_z);
    }

    /// Rotate around the target by the given angle deltas
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth += d_azimuth;
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.update_basis();
    }

    /// Scale the orbit distance (factor < 1 zooms in)
    pub fn zoom(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        self.update_basis();
    }

    fn tan_half_fov(&self) -> f32 {
        (self.fov_y * 0.5).tan()
    }

    /// Camera-space depth of a world point
    pub fn depth(&self, world_pos: Vec3) -> f32 {
        (world_pos - self.position).dot(self.basis_z)
    }

    /// Project a world point to normalized device coordinates.
    /// Returns None when the point is outside the near/far range.
    pub fn world_to_ndc(&self, world_pos: Vec3, aspect: f32) -> Option<(f32, f32)> {
        let rel = world_pos - self.position;
        let cam_z = rel.dot(self.basis_z);
        if cam_z <= self.near || cam_z > self.far {
            return None;
        }
        let t = self.tan_half_fov();
        let ndc_x = rel.dot(self.basis_x) / (cam_z * t * aspect);
        let ndc_y = rel.dot(self.basis_y) / (cam_z * t);
        Some((ndc_x, ndc_y))
    }

    /// Project a world point to pixel coordinates inside `viewport`
    pub fn world_to_screen(&self, world_pos: Vec3, viewport: &Rect) -> Option<(f32, f32)> {
        let (nx, ny) = self.world_to_ndc(world_pos, viewport.aspect())?;
        Some(ndc_to_screen(nx, ny, viewport))
    }

    /// Build a world-space ray through a point given in NDC
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32, aspect: f32) -> Ray {
        let t = self.tan_half_fov();
        let dir = self.basis_z
            + self.basis_x * (ndc_x * t * aspect)
            + self.basis_y * (ndc_y * t);
        Ray::new(self.position, dir)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 70.0, 0.1, 50.0)
    }
}

/// Convert pixel coordinates to NDC relative to a viewport rectangle.
/// NDC y points up, pixel y points down.
pub fn screen_to_ndc(x: f32, y: f32, viewport: &Rect) -> (f32, f32) {
    let nx = (x - viewport.x) / viewport.w * 2.0 - 1.0;
    let ny = -((y - viewport.y) / viewport.h) * 2.0 + 1.0;
    (nx, ny)
}

/// Inverse of `screen_to_ndc`
pub fn ndc_to_screen(nx: f32, ny: f32, viewport: &Rect) -> (f32, f32) {
    let x = viewport.x + (nx + 1.0) * 0.5 * viewport.w;
    let y = viewport.y + (1.0 - ny) * 0.5 * viewport.h;
    (x, y)
}
