//! Line-based geometry primitives: wireframe cubes and axis lines

use crate::render::Vec3;

/// Start point shared by the three axes
pub const AXES_ORIGIN: f32 = -0.5;

/// Coordinate where each axis ends
pub const AXES_LENGTH: f32 = 1.5;

pub const X_AXIS_COLOR: u32 = 0xff8000;
pub const Y_AXIS_COLOR: u32 = 0x990099;
pub const Z_AXIS_COLOR: u32 = 0x4296f5;
pub const CUBE_COLOR: u32 = 0x000000;

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec3,
    pub to: Vec3,
}

/// Edge-only box outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeFrame {
    pub size: Vec3,
    pub position: Vec3,
    pub color: u32,
}

impl CubeFrame {
    pub fn new(size: Vec3, position: Vec3) -> Self {
        Self { size, position, color: CUBE_COLOR }
    }

    /// The 8 corners, bit 0/1/2 of the index selecting +x/+y/+z
    pub fn corners(&self) -> [Vec3; 8] {
        let h = self.size * 0.5;
        let p = self.position;
        std::array::from_fn(|i| {
            let sx = if i & 1 != 0 { h.x } else { -h.x };
            let sy = if i & 2 != 0 { h.y } else { -h.y };
            let sz = if i & 4 != 0 { h.z } else { -h.z };
            Vec3::new(p.x + sx, p.y + sy, p.z + sz)
        })
    }

    /// The 12 box edges
    pub fn edges(&self) -> [Segment; 12] {
        let c = self.corners();
        // Corner pairs differing in exactly one bit
        const PAIRS: [(usize, usize); 12] = [
            (0, 1), (2, 3), (4, 5), (6, 7),
            (0, 2), (1, 3), (4, 6), (5, 7),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        PAIRS.map(|(a, b)| Segment { from: c[a], to: c[b] })
    }
}

/// A colored axis line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    pub segment: Segment,
    pub color: u32,
}

impl AxisLine {
    pub fn new(from: Vec3, to: Vec3, color: u32) -> Self {
        Self { segment: Segment { from, to }, color }
    }
}

/// The X, Y and Z axis lines
pub fn create_axes() -> [AxisLine; 3] {
    let o = AXES_ORIGIN;
    let origin = Vec3::new(o, o, o);
    [
        AxisLine::new(origin, Vec3::new(AXES_LENGTH, o, o), X_AXIS_COLOR),
        AxisLine::new(origin, Vec3::new(o, AXES_LENGTH, o), Y_AXIS_COLOR),
        AxisLine::new(origin, Vec3::new(o, o, AXES_LENGTH), Z_AXIS_COLOR),
    ]
}
