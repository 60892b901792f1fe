//! Pie chart sector pairs
//!
//! Each grid cell gets two flat sectors sharing a center: a positive
//! (green) share of `p` percent and a negative (red) share of the rest.
//! Sectors lie in the horizontal plane. A local angle θ maps to the world
//! offset `(r cos θ, 0, -r sin θ)`, and the positive share starts at π/2.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::grid::CellCoord;
use crate::render::{ray_sector_intersection, Ray, Vec3};

/// Sector radius
pub const PIE_RADIUS: f32 = 0.075;

/// Triangle-fan segments for a full circle
pub const PIE_SEGMENTS: usize = 128;

/// Angle the positive share starts at
pub const PIE_START_ANGLE: f32 = FRAC_PI_2;

pub const POSITIVE_COLOR: u32 = 0x00ff00;
pub const NEGATIVE_COLOR: u32 = 0xff0000;

/// Which share of the split a sector shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn color(self) -> u32 {
        match self {
            Polarity::Positive => POSITIVE_COLOR,
            Polarity::Negative => NEGATIVE_COLOR,
        }
    }

    /// Color name shown in the inspect popup
    pub fn color_name(self) -> &'static str {
        match self {
            Polarity::Positive => "Green",
            Polarity::Negative => "Red",
        }
    }
}

/// One circular sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub center: Vec3,
    pub radius: f32,
    /// Start angle (radians)
    pub start: f32,
    /// Angular size (radians), 0 for an empty share
    pub arc: f32,
    pub polarity: Polarity,
    /// Share this sector represents, 0..=100
    pub percent: f32,
    pub cell: CellCoord,
}

impl Sector {
    pub fn is_empty(&self) -> bool {
        self.arc <= 0.0
    }

    /// World-space point on the rim at local angle `theta`
    pub fn rim_point(&self, theta: f32) -> Vec3 {
        let (sin, cos) = theta.sin_cos();
        Vec3::new(
            self.center.x + self.radius * cos,
            self.center.y,
            self.center.z - self.radius * sin,
        )
    }

    /// Triangle fan as (center, rim_a, rim_b) triples
    pub fn triangles(&self) -> Vec<[Vec3; 3]> {
        if self.is_empty() {
            return Vec::new();
        }
        // Epsilon keeps a full turn at exactly PIE_SEGMENTS
        let steps = ((PIE_SEGMENTS as f32 * self.arc / TAU - 1e-3).ceil() as usize).max(1);
        let step = self.arc / steps as f32;
        (0..steps)
            .map(|i| {
                let a = self.start + step * i as f32;
                [self.center, self.rim_point(a), self.rim_point(a + step)]
            })
            .collect()
    }

    /// A point well inside the sector, used as a click target
    #[cfg(test)]
    pub fn interior_point(&self) -> Vec3 {
        let mid = self.start + self.arc * 0.5;
        let (sin, cos) = mid.sin_cos();
        let r = self.radius * 0.5;
        Vec3::new(self.center.x + r * cos, self.center.y, self.center.z - r * sin)
    }

    /// Ray distance to this sector, if hit
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_sector_intersection(ray, self.center, self.radius, self.start, self.arc)
    }
}

/// The positive and negative sectors of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPair {
    pub positive: Sector,
    pub negative: Sector,
}

impl SectorPair {
    pub fn sectors(&self) -> [Sector; 2] {
        [self.positive, self.negative]
    }
}

/// Build the sector pair for a `percent` split centered at `position`.
/// Percentages outside 0..=100 are clamped.
pub fn create_sector_pair(percent: f32, position: Vec3, cell: CellCoord) -> SectorPair {
    let percent = percent.clamp(0.0, 100.0);
    let positive_arc = percent * 0.01 * TAU;

    let positive = Sector {
        center: position,
        radius: PIE_RADIUS,
        start: PIE_START_ANGLE,
        arc: positive_arc,
        polarity: Polarity::Positive,
        percent,
        cell,
    };
    let negative = Sector {
        center: position,
        radius: PIE_RADIUS,
        start: PIE_START_ANGLE + positive_arc,
        arc: TAU - positive_arc,
        polarity: Polarity::Negative,
        percent: 100.0 - percent,
        cell,
    };

    SectorPair { positive, negative }
}
