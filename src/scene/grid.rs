//! 3x3x3 grid layout
//!
//! Maps each cell of the grid to a cube position, a cube size and a pie
//! chart position/percentage. Index 1 on every axis sits at the origin.
//! Middle-index layers are thin, edge layers wide, so the nested structure
//! reads at a glance.

use crate::render::Vec3;

/// Cells per axis
pub const GRID_SIZE: usize = 3;

/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;

/// Edge length of an outer (index 0 or 2) layer
pub const WIDE: f32 = 0.382;

/// Edge length of the middle (index 1) layer
pub const THIN: f32 = 0.236;

/// Distance between adjacent cell centers
pub const SPACING: f32 = 0.309;

/// Percentage table, indexed `[x][y][z]`. Hand-authored, not derived.
pub const PERCENT_TABLE: [[[f32; GRID_SIZE]; GRID_SIZE]; GRID_SIZE] = [
    [
        [100.0, 83.4, 66.7],
        [83.4, 66.7, 50.0],
        [66.7, 50.0, 33.3],
    ],
    [
        [83.4, 66.7, 50.0],
        [66.7, 50.0, 33.3],
        [50.0, 33.3, 16.7],
    ],
    [
        [66.7, 50.0, 33.3],
        [50.0, 33.3, 16.7],
        [33.3, 16.7, 0.0],
    ],
];

/// Spatial axis of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase tag used in coordinate labels
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl CellCoord {
    /// Create a coordinate, None if any index is out of range
    pub fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        let limit = GRID_SIZE as u8;
        if x < limit && y < limit && z < limit {
            Some(Self { x, y, z })
        } else {
            None
        }
    }

    /// All 27 cells in x-major, then y, then z order
    pub fn all() -> impl Iterator<Item = CellCoord> {
        let n = GRID_SIZE as u8;
        (0..n).flat_map(move |x| {
            (0..n).flat_map(move |y| (0..n).map(move |z| CellCoord { x, y, z }))
        })
    }

    pub fn index(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Axis-letter tags, e.g. `["x0", "y1", "z2"]`
    pub fn tags(self) -> [String; 3] {
        Axis::ALL.map(|axis| format!("{}{}", axis.letter(), self.index(axis)))
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.tags();
        write!(f, "{} {} {}", x, y, z)
    }
}

/// Per-axis offset of an index from the grid center
fn axis_offset(index: u8) -> f32 {
    (index as f32 - 1.0) * SPACING
}

/// Per-axis edge length of an index's layer
fn axis_size(index: u8) -> f32 {
    if index == 1 { THIN } else { WIDE }
}

/// Center of the cube at `cell`
pub fn cube_position(cell: CellCoord) -> Vec3 {
    Vec3::new(axis_offset(cell.x), axis_offset(cell.y), axis_offset(cell.z))
}

/// Edge lengths of the cube at `cell`
pub fn cube_size(cell: CellCoord) -> Vec3 {
    Vec3::new(axis_size(cell.x), axis_size(cell.y), axis_size(cell.z))
}

/// Center of the pie chart at `cell`: the middle of its cube's bottom face
pub fn pie_position(cell: CellCoord) -> Vec3 {
    let center = cube_position(cell);
    let size = cube_size(cell);
    Vec3::new(center.x, center.y - size.y * 0.5, center.z)
}

/// Percentage shown by the pie chart at `cell`
pub fn percent_at(cell: CellCoord) -> f32 {
    PERCENT_TABLE[cell.x as usize][cell.y as usize][cell.z as usize]
}

/// Layout of one grid cell
#[derive(Debug, Clone, Copy)]
pub struct CellLayout {
    pub cell: CellCoord,
    pub cube_position: Vec3,
    pub cube_size: Vec3,
    pub pie_position: Vec3,
    pub percent: f32,
}

/// Lay out all 27 cells
pub fn layout() -> Vec<CellLayout> {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    cells.extend(CellCoord::all().map(|cell| CellLayout {
        cell,
        cube_position: cube_position(cell),
        cube_size: cube_size(cell),
        pie_position: pie_position(cell),
        percent: percent_at(cell),
    }));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, y: u8, z: u8) -> CellCoord {
        CellCoord::new(x, y, z).unwrap()
    }

    #[test]
    fn test_layout_has_every_cell_once() {
        let cells = layout();
        assert_eq!(cells.len(), CELL_COUNT);
        let mut coords: Vec<_> = cells.iter().map(|c| c.cell).collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), CELL_COUNT);
    }

    #[test]
    fn test_corner_and_center_percentages() {
        assert_eq!(percent_at(cell(0, 0, 0)), 100.0);
        assert_eq!(percent_at(cell(2, 2, 2)), 0.0);
        assert_eq!(percent_at(cell(1, 1, 1)), 50.0);
        assert_eq!(percent_at(cell(0, 2, 2)), 33.3);
        assert_eq!(percent_at(cell(2, 1, 2)), 16.7);
    }

    #[test]
    fn test_table_follows_index_sum() {
        // The table only depends on x + y + z
        let by_sum = [100.0, 83.4, 66.7, 50.0, 33.3, 16.7, 0.0];
        for c in CellCoord::all() {
            let sum = (c.x + c.y + c.z) as usize;
            assert_eq!(percent_at(c), by_sum[sum], "cell {}", c);
        }
    }

    #[test]
    fn test_thin_middle_layers() {
        let s = cube_size(cell(1, 0, 2));
        assert_eq!(s.x, THIN);
        assert_eq!(s.y, WIDE);
        assert_eq!(s.z, WIDE);
        assert_eq!(cube_size(cell(1, 1, 1)), Vec3::new(THIN, THIN, THIN));
    }

    #[test]
    fn test_positions() {
        assert_eq!(cube_position(cell(1, 1, 1)), Vec3::ZERO);
        let p = cube_position(cell(0, 2, 1));
        assert!((p.x + SPACING).abs() < 1e-6);
        assert!((p.y - SPACING).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn test_pie_sits_on_cube_floor() {
        // Wide layers drop by 0.191, the thin middle layer by 0.118
        let low = pie_position(cell(0, 0, 0));
        assert!((low.y - (-SPACING - 0.191)).abs() < 1e-6);
        let mid = pie_position(cell(2, 1, 0));
        assert!((mid.y + 0.118).abs() < 1e-6);
        let high = pie_position(cell(1, 2, 2));
        assert!((high.y - (SPACING - 0.191)).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_cell() {
        assert!(CellCoord::new(3, 0, 0).is_none());
        assert!(CellCoord::new(0, 0, 2).is_some());
    }

    #[test]
    fn test_tags() {
        let c = cell(0, 1, 2);
        assert_eq!(c.tags(), ["x0".to_string(), "y1".to_string(), "z2".to_string()]);
        assert_eq!(c.to_string(), "x0 y1 z2");
    }
}
