//! Immediate-mode UI for the sidebar, axis dropdowns and inspect modal
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering
//!
//! Input handling is split from drawing where it matters so it can be
//! tested without a graphics context.

mod input;
mod rect;
pub mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use widgets::*;
