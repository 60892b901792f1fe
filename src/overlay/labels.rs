//! Axis labels anchored to 3D points, each with its own dropdown
//!
//! Every frame the anchors are projected to screen space; the label text
//! sits just above its anchor and the dropdown hangs below it.

use macroquad::prelude::measure_text;

use super::options::{AxisOption, AxisSelection, VerticalOption, XOption, ZOption};
use crate::render::{Camera, Vec3};
use crate::scene::{Axis, AXES_LENGTH, AXES_ORIGIN};
use crate::ui::{self, draw_text_in, theme, DropdownState, Rect, UiContext};

/// Extra height above the Y axis end so the label clears the line
const Y_LABEL_LIFT: f32 = 0.25;

pub const DROPDOWN_WIDTH: f32 = 150.0;
pub const DROPDOWN_HEIGHT: f32 = 20.0;
const LABEL_HEIGHT: f32 = 18.0;

/// A text label bound to one axis
#[derive(Debug, Clone)]
pub struct AxisLabel {
    pub axis: Axis,
    /// Host control identifier of this label's dropdown
    pub control_id: &'static str,
    pub text: &'static str,
    pub anchor: Vec3,
    pub dropdown: DropdownState,
}

/// The three axis labels
pub fn create_axis_labels() -> [AxisLabel; 3] {
    let o = AXES_ORIGIN;
    [
        AxisLabel {
            axis: Axis::X,
            control_id: "xOptions",
            text: "DO THINGS (What we do)",
            anchor: Vec3::new(AXES_LENGTH, o, o),
            dropdown: DropdownState::default(),
        },
        AxisLabel {
            axis: Axis::Y,
            control_id: "yOptions",
            text: "THINGS (Who we are)",
            anchor: Vec3::new(o, AXES_LENGTH + Y_LABEL_LIFT, o),
            dropdown: DropdownState::default(),
        },
        AxisLabel {
            axis: Axis::Z,
            control_id: "zOptions",
            text: "SOMEWHERE (Where we are)",
            anchor: Vec3::new(o, o, AXES_LENGTH),
            dropdown: DropdownState::default(),
        },
    ]
}

/// Screen placement of one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Text box, bottom-left corner on the anchor
    pub text: Rect,
    /// Dropdown trigger, one row below the anchor
    pub dropdown: Rect,
}

/// Place a label whose anchor projects to (x, y)
pub fn place_label(x: f32, y: f32, text_width: f32) -> LabelPlacement {
    LabelPlacement {
        text: Rect::new(x, y - LABEL_HEIGHT, text_width, LABEL_HEIGHT),
        dropdown: Rect::new(x, y + DROPDOWN_HEIGHT, DROPDOWN_WIDTH, DROPDOWN_HEIGHT),
    }
}

/// What changed in the overlay this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    VerticalChanged(VerticalOption),
    XChanged(XOption),
    ZChanged(ZOption),
}

/// Labels plus the current dropdown selections
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    pub labels: [AxisLabel; 3],
    pub selection: AxisSelection,
    /// Screen placements from the last layout pass
    placements: [Option<LabelPlacement>; 3],
}

impl LabelOverlay {
    pub fn new() -> Self {
        Self {
            labels: create_axis_labels(),
            selection: AxisSelection::default(),
            placements: [None; 3],
        }
    }

    /// Project every anchor. Labels behind the camera get no placement.
    /// Runs every frame, so the label layer always reflects the current
    /// camera and selection.
    pub fn layout(&mut self, camera: &Camera, viewport: &Rect) {
        let font_size = theme::FONT_SIZE_CONTENT as u16;
        for (label, slot) in self.labels.iter().zip(self.placements.iter_mut()) {
            *slot = camera.world_to_screen(label.anchor, viewport).map(|(x, y)| {
                let width = measure_text(label.text, None, font_size, 1.0).width + 12.0;
                place_label(x, y, width)
            });
        }
    }

    /// Apply an event to the selection. Vertical changes rewrite X and Z.
    pub fn apply(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::VerticalChanged(v) => self.selection.select_vertical(v),
            OverlayEvent::XChanged(x) => self.selection.x = x,
            OverlayEvent::ZChanged(z) => self.selection.z = z,
        }
    }

    /// Close every open dropdown
    pub fn close_all(&mut self) {
        for label in &mut self.labels {
            label.dropdown.open = false;
        }
    }

    /// Draw labels and dropdowns, returning any selection change
    pub fn draw(&mut self, ctx: &mut UiContext) -> Option<OverlayEvent> {
        let mut event = None;

        for (label, placement) in self.labels.iter_mut().zip(self.placements.iter()) {
            let Some(p) = placement else { continue };
            draw_text_in(label.text, &p.text, theme::FONT_SIZE_CONTENT, theme::LABEL_TEXT);

            let changed = match label.axis {
                Axis::X => ui::dropdown(
                    ctx,
                    p.dropdown,
                    &mut label.dropdown,
                    &XOption::labels(),
                    self.selection.x.position(),
                )
                .and_then(|i| XOption::ALL.get(i).copied())
                .map(OverlayEvent::XChanged),
                Axis::Y => ui::dropdown(
                    ctx,
                    p.dropdown,
                    &mut label.dropdown,
                    &VerticalOption::labels(),
                    self.selection.vertical.position(),
                )
                .and_then(|i| VerticalOption::ALL.get(i).copied())
                .map(OverlayEvent::VerticalChanged),
                Axis::Z => ui::dropdown(
                    ctx,
                    p.dropdown,
                    &mut label.dropdown,
                    &ZOption::labels(),
                    self.selection.z.position(),
                )
                .and_then(|i| ZOption::ALL.get(i).copied())
                .map(OverlayEvent::ZChanged),
            };

            if changed.is_some() {
                event = changed;
            }
        }

        if let Some(e) = event {
            log::debug!("{} changed: {:?}", self.control_id_for(e), e);
            self.apply(e);
        }
        event
    }

    fn control_id_for(&self, event: OverlayEvent) -> &'static str {
        let axis = match event {
            OverlayEvent::XChanged(_) => Axis::X,
            OverlayEvent::VerticalChanged(_) => Axis::Y,
            OverlayEvent::ZChanged(_) => Axis::Z,
        };
        self.labels
            .iter()
            .find(|l| l.axis == axis)
            .map(|l| l.control_id)
            .unwrap_or("")
    }
}

impl Default for LabelOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_anchors() {
        let labels = create_axis_labels();
        assert_eq!(labels[0].anchor, Vec3::new(1.5, -0.5, -0.5));
        assert_eq!(labels[1].anchor, Vec3::new(-0.5, 1.75, -0.5));
        assert_eq!(labels[2].anchor, Vec3::new(-0.5, -0.5, 1.5));
        assert_eq!(labels[1].control_id, "yOptions");
    }

    #[test]
    fn test_place_label_text_above_dropdown_below() {
        let p = place_label(100.0, 200.0, 80.0);
        assert!((p.text.bottom() - 200.0).abs() < 1e-6);
        assert!(p.dropdown.y > 200.0);
        assert_eq!(p.text.x, p.dropdown.x);
    }

    #[test]
    fn test_vertical_change_syncs_dropdowns() {
        let mut overlay = LabelOverlay::new();
        overlay.apply(OverlayEvent::VerticalChanged(VerticalOption::Organisation));
        assert_eq!(overlay.selection.x, XOption::Products);
        assert_eq!(overlay.selection.z, ZOption::Market);
        // Positions the X and Z dropdowns display on the next draw
        assert_eq!(overlay.selection.x.position(), 1);
        assert_eq!(overlay.selection.z.position(), 1);

        overlay.apply(OverlayEvent::VerticalChanged(VerticalOption::ManagementStyle));
        assert_eq!(overlay.selection.x.position(), 2);
        assert_eq!(overlay.selection.z.position(), 2);
    }

    #[test]
    fn test_x_change_leaves_others() {
        let mut overlay = LabelOverlay::new();
        overlay.apply(OverlayEvent::XChanged(XOption::Tasks));
        assert_eq!(overlay.selection.x, XOption::Tasks);
        assert_eq!(overlay.selection.vertical, VerticalOption::System);
        assert_eq!(overlay.selection.z, ZOption::Supersystem);
    }

    #[test]
    fn test_close_all() {
        let mut overlay = LabelOverlay::new();
        overlay.labels[2].dropdown.open = true;
        overlay.close_all();
        assert!(overlay.labels.iter().all(|l| !l.dropdown.open));
    }
}
