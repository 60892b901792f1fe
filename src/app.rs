//! Application state and per-frame update
//!
//! `AppState` owns everything the visualization needs: the scene, the
//! camera, the label overlay, the inspect modal and the pie toggle. The
//! main loop feeds it input once per frame and it draws itself.

use macroquad::prelude::*;

use crate::config::VizConfig;
use crate::overlay::{AxisOption, LabelOverlay, OverlayEvent};
use crate::pick::{InspectState, INFO_ID, MODAL_ID};
use crate::render::{draw_3d_line_clipped, draw_3d_triangle, hex_color, Camera, Vec3};
use crate::scene::pie::{NEGATIVE_COLOR, POSITIVE_COLOR};
use crate::scene::{Node, Scene};
use crate::ui::{self, theme, Rect, UiContext};

/// Identifier of the pie visibility checkbox
pub const PIE_CHECKBOX_ID: &str = "showPieChartCheckbox";

/// Pointer travel (pixels) beyond which a press counts as a drag, not a click
const CLICK_SLOP: f32 = 4.0;

const SIDEBAR_PAD: f32 = 12.0;
const ROW_HEIGHT: f32 = 22.0;
const AXIS_LINE_WIDTH: f32 = 2.0;
const CUBE_LINE_WIDTH: f32 = 1.5;

/// Drag tracking for the orbit controller
#[derive(Debug, Clone, Copy, Default)]
struct OrbitDrag {
    /// Press position, set while the left button is held in the viewport
    start: Option<(f32, f32)>,
    last: (f32, f32),
    /// Pointer moved beyond CLICK_SLOP since the press
    moved: bool,
}

/// Input sampled for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub mouse: ui::MouseState,
    pub escape_pressed: bool,
}

/// Explicit application context
pub struct AppState {
    pub config: VizConfig,
    pub scene: Scene,
    pub camera: Camera,
    pub overlay: LabelOverlay,
    pub inspect: InspectState,
    pub ui: UiContext,
    drag: OrbitDrag,
}

impl AppState {
    pub fn new(config: VizConfig) -> Self {
        let cam_cfg = &config.camera;
        let mut camera = Camera::looking_at(
            Vec3::from_array(cam_cfg.position),
            Vec3::from_array(cam_cfg.target),
            cam_cfg.fov_deg,
            cam_cfg.near,
            cam_cfg.far,
        );
        camera.min_distance = cam_cfg.min_distance;
        camera.max_distance = cam_cfg.max_distance;

        let mut scene = Scene::build();
        scene.set_pies_visible(config.show_pie_charts);

        let mut overlay = LabelOverlay::new();
        if let Some(vertical) = config.vertical_option() {
            overlay.apply(OverlayEvent::VerticalChanged(vertical));
        }

        Self {
            config,
            scene,
            camera,
            overlay,
            inspect: InspectState::default(),
            ui: UiContext::new(),
            drag: OrbitDrag::default(),
        }
    }

    /// Split the window into (sidebar, viewport)
    pub fn layout(&self, screen_w: f32, screen_h: f32) -> (Rect, Rect) {
        let screen = Rect::screen(screen_w, screen_h);
        screen.split_h(1.0 - self.config.viewport_fraction)
    }

    /// Apply the pie checkbox state to the render set
    pub fn set_show_pies(&mut self, show: bool) {
        self.scene.set_pies_visible(show);
    }

    /// Give the inspect modal first look at this frame's press, closing it
    /// when its close button is hit. No-op while nothing is displayed.
    fn modal_input(&mut self, screen: &Rect) {
        let Some(info) = self.inspect.displayed() else {
            return;
        };
        let line_count = info.lines().len();
        if ui::modal_input(&mut self.ui, screen, line_count) {
            log::debug!("{} closed", MODAL_ID);
            self.inspect.close();
        }
    }

    /// Orbit/zoom from raw pointer input, and report a completed click.
    /// Returns the click position when the left button was released without dragging.
    fn update_orbit(
        &mut self,
        mouse: &ui::MouseState,
        viewport: &Rect,
        over_ui: bool,
    ) -> Option<(f32, f32)> {
        let pos = (mouse.x, mouse.y);

        if mouse.left_pressed && viewport.contains(mouse.x, mouse.y) && !over_ui {
            self.drag = OrbitDrag { start: Some(pos), last: pos, moved: false };
        }

        let mut click = None;
        if let Some(start) = self.drag.start {
            if mouse.left_down {
                let dx = pos.0 - self.drag.last.0;
                let dy = pos.1 - self.drag.last.1;
                let travel = ((pos.0 - start.0).powi(2) + (pos.1 - start.1).powi(2)).sqrt();
                if travel > CLICK_SLOP {
                    self.drag.moved = true;
                }
                if self.drag.moved && (dx != 0.0 || dy != 0.0) {
                    let s = self.config.camera.orbit_sensitivity;
                    self.camera.orbit(-dx * s, dy * s);
                }
                self.drag.last = pos;
            } else {
                if !self.drag.moved {
                    click = Some(start);
                }
                self.drag = OrbitDrag::default();
            }
        }

        if mouse.scroll != 0.0 && viewport.contains(mouse.x, mouse.y) && !over_ui {
            let step = self.config.camera.zoom_step;
            let factor = if mouse.scroll > 0.0 { step } else { 1.0 / step };
            self.camera.zoom(factor);
        }

        click
    }

    /// Run one frame: input, scene, overlay, modal
    pub fn frame(&mut self, input: FrameInput, screen_w: f32, screen_h: f32) {
        let screen = Rect::screen(screen_w, screen_h);
        let (sidebar, viewport) = self.layout(screen_w, screen_h);
        self.ui.begin_frame(input.mouse);

        if input.escape_pressed {
            self.overlay.close_all();
            self.inspect.close();
        }

        // The modal is the top layer, so it sees the press first
        self.modal_input(&screen);

        let bg = hex_color(self.config.background);
        draw_rectangle(viewport.x, viewport.y, viewport.w, viewport.h, bg);
        self.draw_scene(&viewport);

        // Overlay and sidebar widgets claim their clicks before picking
        self.overlay.layout(&self.camera, &viewport);
        self.overlay.draw(&mut self.ui);
        self.draw_sidebar(&sidebar);

        if let Some(info) = self.inspect.displayed() {
            ui::draw_modal(&self.ui, screen, "Pie chart", &info.lines());
        }

        let over_ui = self.ui.pointer_over_ui() || self.ui.is_captured();
        if let Some((x, y)) = self.update_orbit(&input.mouse, &viewport, over_ui) {
            if self.inspect.handle_click(&self.scene, &self.camera, &viewport, x, y) {
                log::info!("{}: {:?}", INFO_ID, self.inspect.displayed());
            }
        }
    }

    /// Draw every node in the render set. Sectors are depth sorted back to front.
    fn draw_scene(&self, viewport: &Rect) {
        let mut sectors = Vec::new();

        for (_, node) in self.scene.visible_nodes() {
            match node {
                Node::Cube(cube) => {
                    let color = hex_color(cube.color);
                    for edge in cube.edges() {
                        draw_3d_line_clipped(
                            &self.camera,
                            viewport,
                            edge.from,
                            edge.to,
                            CUBE_LINE_WIDTH,
                            color,
                        );
                    }
                }
                Node::Axis(axis) => {
                    draw_3d_line_clipped(
                        &self.camera,
                        viewport,
                        axis.segment.from,
                        axis.segment.to,
                        AXIS_LINE_WIDTH,
                        hex_color(axis.color),
                    );
                }
                Node::Sector(sector) => sectors.push(sector),
            }
        }

        sectors.sort_by(|a, b| {
            self.camera
                .depth(b.center)
                .total_cmp(&self.camera.depth(a.center))
        });
        for sector in sectors {
            let color = hex_color(sector.polarity.color());
            for [a, b, c] in sector.triangles() {
                draw_3d_triangle(&self.camera, viewport, a, b, c, color);
            }
        }
    }

    fn draw_sidebar(&mut self, rect: &Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::BG_COLOR);
        self.ui.hover(rect);
        let inner = rect.pad(SIDEBAR_PAD);
        let mut y = inner.y;

        let header = Rect::new(inner.x, y, inner.w, ROW_HEIGHT);
        ui::draw_text_in("Cube view", &header, theme::FONT_SIZE_HEADER, WHITE);
        y += ROW_HEIGHT + 8.0;

        let mut show = self.scene.pies_visible();
        let row = Rect::new(inner.x, y, inner.w, ROW_HEIGHT);
        if ui::checkbox(&mut self.ui, row, "Show pie charts", &mut show) {
            log::info!("{} -> {}", PIE_CHECKBOX_ID, show);
            self.set_show_pies(show);
        }
        y += ROW_HEIGHT + 12.0;

        let legend = [(POSITIVE_COLOR, "In favour"), (NEGATIVE_COLOR, "Against")];
        for (color, text) in legend {
            draw_rectangle(inner.x + 2.0, y + 5.0, 12.0, 12.0, hex_color(color));
            let text_rect = Rect::new(inner.x + 14.0, y, inner.w - 14.0, ROW_HEIGHT);
            ui::draw_text_in(text, &text_rect, theme::FONT_SIZE_SMALL, theme::TEXT_COLOR);
            y += ROW_HEIGHT;
        }
        y += 12.0;

        let sel = self.overlay.selection;
        let lines = [
            format!("X: {}", sel.x.label()),
            format!("Y: {}", sel.vertical.label()),
            format!("Z: {}", sel.z.label()),
        ];
        for line in &lines {
            let row = Rect::new(inner.x, y, inner.w, ROW_HEIGHT);
            ui::draw_text_in(line, &row, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);
            y += ROW_HEIGHT;
        }

        let hint = Rect::new(inner.x, inner.bottom() - ROW_HEIGHT, inner.w, ROW_HEIGHT);
        let hint_text = "Drag to orbit, scroll to zoom";
        ui::draw_text_in(hint_text, &hint, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);

        // Swallow presses on empty sidebar space
        self.ui.take_click(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::SectorInfo;
    use crate::scene::{CellCoord, Polarity};
    use crate::ui::{dropdown_input, modal_layout, MouseState};

    fn app() -> AppState {
        AppState::new(VizConfig::default())
    }

    fn mouse(x: f32, y: f32, down: bool, pressed: bool) -> MouseState {
        MouseState { x, y, left_down: down, left_pressed: pressed, scroll: 0.0 }
    }

    #[test]
    fn test_layout_uses_viewport_fraction() {
        let app = app();
        let (sidebar, viewport) = app.layout(1000.0, 600.0);
        assert!((viewport.w - 750.0).abs() < 1e-3);
        assert!((sidebar.w - 250.0).abs() < 1e-3);
        assert!((viewport.x - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_config_hides_pies_at_start() {
        let mut config = VizConfig::default();
        config.show_pie_charts = false;
        let app = AppState::new(config);
        assert!(!app.scene.pies_visible());
        assert_eq!(app.scene.visible_sectors().count(), 0);
    }

    #[test]
    fn test_config_sets_starting_axis_options() {
        let mut config = VizConfig::default();
        config.initial_vertical = "organisationOption".to_string();
        let app = AppState::new(config);
        let sel = app.overlay.selection;
        assert_eq!(sel.vertical.value(), "organisationOption");
        assert_eq!(sel.x.value(), "productOptions");
        assert_eq!(sel.z.value(), "marketOption");
    }

    #[test]
    fn test_press_release_is_click() {
        let mut app = app();
        let (_, viewport) = app.layout(1000.0, 600.0);
        let (x, y) = (viewport.center_x(), viewport.center_y());

        assert_eq!(app.update_orbit(&mouse(x, y, true, true), &viewport, false), None);
        let release = mouse(x + 1.0, y, false, false);
        assert_eq!(app.update_orbit(&release, &viewport, false), Some((x, y)));
    }

    #[test]
    fn test_drag_orbits_without_click() {
        let mut app = app();
        let (_, viewport) = app.layout(1000.0, 600.0);
        let (x, y) = (viewport.center_x(), viewport.center_y());
        let azimuth = app.camera.azimuth;

        app.update_orbit(&mouse(x, y, true, true), &viewport, false);
        app.update_orbit(&mouse(x + 40.0, y, true, false), &viewport, false);
        assert!((app.camera.azimuth - azimuth).abs() > 1e-4);
        let release = mouse(x + 40.0, y, false, false);
        assert_eq!(app.update_orbit(&release, &viewport, false), None);
    }

    #[test]
    fn test_press_over_ui_does_not_click() {
        let mut app = app();
        let (_, viewport) = app.layout(1000.0, 600.0);
        let (x, y) = (viewport.center_x(), viewport.center_y());
        app.update_orbit(&mouse(x, y, true, true), &viewport, true);
        assert_eq!(app.update_orbit(&mouse(x, y, false, false), &viewport, false), None);
    }

    #[test]
    fn test_scroll_zooms() {
        let mut app = app();
        let (_, viewport) = app.layout(1000.0, 600.0);
        let d = app.camera.distance;
        let m = MouseState {
            x: viewport.center_x(),
            y: viewport.center_y(),
            scroll: 1.0,
            ..Default::default()
        };
        app.update_orbit(&m, &viewport, false);
        assert!(app.camera.distance < d);
    }

    #[test]
    fn test_toggle_roundtrip_through_app() {
        let mut app = app();
        let mut before = app.scene.render_set().to_vec();
        app.set_show_pies(false);
        assert!(!app.scene.pies_visible());
        app.set_show_pies(true);
        let mut after = app.scene.render_set().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_modal_close_wins_over_dropdown_beneath() {
        let mut app = app();
        let info = SectorInfo {
            percent: 66.7,
            cell: CellCoord::new(0, 2, 0).unwrap(),
            polarity: Polarity::Positive,
        };
        app.inspect = InspectState::Displaying(info);

        let screen = Rect::screen(1000.0, 600.0);
        let close = modal_layout(&screen, info.lines().len()).close;
        app.ui.begin_frame(mouse(close.center_x(), close.center_y(), true, true));
        app.modal_input(&screen);
        assert_eq!(app.inspect, InspectState::Idle);

        // A label dropdown projected under the close button sees a captured press
        let trigger = Rect::new(close.x, close.y, 150.0, 20.0);
        let label = &mut app.overlay.labels[0];
        assert_eq!(dropdown_input(&mut app.ui, &trigger, &mut label.dropdown, 3), None);
        assert!(!label.dropdown.open);
    }

    #[test]
    fn test_modal_input_idle_leaves_press_alone() {
        let mut app = app();
        let screen = Rect::screen(1000.0, 600.0);
        app.ui.begin_frame(mouse(500.0, 300.0, true, true));
        app.modal_input(&screen);
        assert!(!app.ui.is_captured());
        assert!(!app.ui.pointer_over_ui());
    }
}
