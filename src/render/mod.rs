//! Projection and drawing for the 3D viewport
//!
//! # Module Organization
//!
//! - `math` - Vec3 and angle helpers
//! - `camera` - Orbit camera, world <-> screen projection
//! - `ray` - Ray type and plane/sector intersection
//! - `draw` - Clipped 3D lines and triangles drawn through macroquad

pub mod camera;
pub mod draw;
pub mod math;
pub mod ray;

pub use camera::{screen_to_ndc, Camera};
pub use draw::{draw_3d_line_clipped, draw_3d_triangle, hex_color};
pub use math::Vec3;
pub use ray::{ray_sector_intersection, Ray};
