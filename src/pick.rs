//! Click-to-inspect for pie chart sectors
//!
//! A click is turned into a camera ray, tested against every sector in the
//! render set, and the nearest hit is shown in the inspect modal. A miss
//! leaves the modal as it was.

use crate::render::{screen_to_ndc, Camera};
use crate::scene::{CellCoord, Polarity, Scene, Sector};
use crate::ui::Rect;

/// Host identifiers of the modal and its info panel
pub const MODAL_ID: &str = "pieChartModal";
pub const INFO_ID: &str = "pieChartInfo";

/// Percentage with one decimal, without a trailing ".0"
fn format_percent(percent: f32) -> String {
    let text = format!("{:.1}", percent);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// What the inspect modal shows about a sector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorInfo {
    pub percent: f32,
    pub cell: CellCoord,
    pub polarity: Polarity,
}

impl SectorInfo {
    pub fn from_sector(sector: &Sector) -> Self {
        Self {
            percent: sector.percent,
            cell: sector.cell,
            polarity: sector.polarity,
        }
    }

    /// Text lines for the info panel
    pub fn lines(&self) -> Vec<String> {
        let [x, y, z] = self.cell.tags();
        vec![
            format!("Percentage: {}%", format_percent(self.percent)),
            format!("Coordinates: {} {} {}", x, y, z),
            format!("Color: {}", self.polarity.color_name()),
        ]
    }
}

/// Find the nearest visible sector under a pixel inside `viewport`
pub fn pick_sector(
    scene: &Scene,
    camera: &Camera,
    viewport: &Rect,
    x: f32,
    y: f32,
) -> Option<SectorInfo> {
    if !viewport.contains(x, y) {
        return None;
    }
    let (nx, ny) = screen_to_ndc(x, y, viewport);
    let ray = camera.ray_from_ndc(nx, ny, viewport.aspect());

    scene
        .visible_sectors()
        .filter_map(|s| s.intersect(&ray).map(|t| (t, s)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, s)| SectorInfo::from_sector(s))
}

/// Inspect modal state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InspectState {
    #[default]
    Idle,
    Displaying(SectorInfo),
}

impl InspectState {
    /// Hit-test a click. A hit replaces what is displayed, a miss changes nothing.
    /// Returns whether something was hit.
    pub fn handle_click(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        viewport: &Rect,
        x: f32,
        y: f32,
    ) -> bool {
        match pick_sector(scene, camera, viewport, x, y) {
            Some(info) => {
                log::debug!(
                    "Picked {} sector at {} ({}%)",
                    info.polarity.color_name(),
                    info.cell,
                    format_percent(info.percent)
                );
                *self = InspectState::Displaying(info);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        *self = InspectState::Idle;
    }

    pub fn displayed(&self) -> Option<&SectorInfo> {
        match self {
            InspectState::Idle => None,
            InspectState::Displaying(info) => Some(info),
        }
    }
}
