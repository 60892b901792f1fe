//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Sidebar background
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/panel title background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Text drawn over the light viewport background
pub const LABEL_TEXT: Color = Color::new(0.1, 0.1, 0.12, 1.0);

/// Accent color (cyan)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

/// Panel border
pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 14.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

// =============================================================================
// Dropdown/Menu Colors
// =============================================================================

/// Dropdown menu background
pub const DROPDOWN_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0); // ~45, 45, 50

/// Dropdown menu border
pub const DROPDOWN_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Dropdown item hover background
pub const DROPDOWN_HOVER: Color = Color::new(0.235, 0.314, 0.392, 1.0); // ~60, 80, 100

/// Dropdown trigger background
pub const DROPDOWN_TRIGGER_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0); // ~50, 50, 55

/// Dropdown trigger hover background
pub const DROPDOWN_TRIGGER_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0); // ~60, 60, 70

// =============================================================================
// Modal
// =============================================================================

/// Dimming layer behind the modal
pub const MODAL_SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.35);

/// Modal body
pub const MODAL_BG: Color = Color::new(0.13, 0.13, 0.15, 0.97);
