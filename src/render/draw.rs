//! Drawing utilities for 3D primitives
//!
//! Projects world-space geometry through the camera and draws it with
//! macroquad's 2D primitives, clipped to the near plane.

use macroquad::prelude::{draw_line, draw_triangle, Color};
use macroquad::math::Vec2 as MqVec2;

use super::camera::{ndc_to_screen, Camera};
use super::math::Vec3;
use crate::ui::Rect;

/// Draw a 3D line with near-plane clipping.
pub fn draw_3d_line_clipped(
    camera: &Camera,
    viewport: &Rect,
    p0: Vec3,
    p1: Vec3,
    thickness: f32,
    color: Color,
) {
    let near = camera.near * 1.01;
    let z0 = camera.depth(p0);
    let z1 = camera.depth(p1);

    // Both behind camera - skip entirely
    if z0 <= near && z1 <= near {
        return;
    }

    // Clip line to near plane if needed
    let (clipped_p0, clipped_p1) = if z0 <= near {
        let t = (near - z0) / (z1 - z0);
        (p0 + (p1 - p0) * t, p1)
    } else if z1 <= near {
        let t = (near - z0) / (z1 - z0);
        (p0, p0 + (p1 - p0) * t)
    } else {
        (p0, p1)
    };

    let aspect = viewport.aspect();
    let s0 = camera.world_to_ndc(clipped_p0, aspect);
    let s1 = camera.world_to_ndc(clipped_p1, aspect);

    if let (Some((nx0, ny0)), Some((nx1, ny1))) = (s0, s1) {
        let (x0, y0) = ndc_to_screen(nx0, ny0, viewport);
        let (x1, y1) = ndc_to_screen(nx1, ny1, viewport);
        draw_line(x0, y0, x1, y1, thickness, color);
    }
}

/// Draw a filled 3D triangle. Triangles touching the near plane are skipped.
pub fn draw_3d_triangle(camera: &Camera, viewport: &Rect, a: Vec3, b: Vec3, c: Vec3, color: Color) {
    let project = |p: Vec3| camera.world_to_screen(p, viewport).map(|(x, y)| MqVec2::new(x, y));
    if let (Some(sa), Some(sb), Some(sc)) = (project(a), project(b), project(c)) {
        draw_triangle(sa, sb, sc, color);
    }
}

/// Convert a 0xRRGGBB hex color to a macroquad color
pub fn hex_color(hex: u32) -> Color {
    Color::from_rgba(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
        255,
    )
}
