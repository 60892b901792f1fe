//! Axis labels and their option dropdowns

pub mod labels;
pub mod options;

pub use labels::{LabelOverlay, OverlayEvent};
pub use options::{AxisOption, VerticalOption};
