//! Scene assembly
//!
//! Builds the static visualization once at startup:
//! - `grid` - cell coordinates, positions, sizes and the percentage table
//! - `geometry` - wireframe cubes and axis lines
//! - `pie` - complementary sector pairs per cell
//! - `graph` - node arena and render set

pub mod geometry;
pub mod graph;
pub mod grid;
pub mod pie;

pub use geometry::{AXES_LENGTH, AXES_ORIGIN};
pub use graph::{Node, Scene};
pub use grid::{Axis, CellCoord};
pub use pie::{Polarity, Sector};
