//! Input state for UI interaction

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
    pub scroll: f32,        // Scroll wheel delta
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Set once a widget has consumed this frame's press
    captured: bool,
    /// Set when the pointer is over any widget
    hovered: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.captured = false;
        self.hovered = false;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Register a widget area; returns whether the pointer is over it
    pub fn hover(&mut self, rect: &Rect) -> bool {
        let inside = self.mouse.inside(rect);
        if inside {
            self.hovered = true;
        }
        inside
    }

    pub fn pointer_over_ui(&self) -> bool {
        self.hovered
    }

    /// Uncaptured press inside `rect`. Captures it when true.
    pub fn take_click(&mut self, rect: &Rect) -> bool {
        if !self.captured && self.mouse.clicked(rect) {
            self.captured = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_at(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_down: true, left_pressed: true, ..Default::default() }
    }

    #[test]
    fn test_click_captured_once() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(press_at(5.0, 5.0));
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(ctx.take_click(&r));
        assert!(!ctx.take_click(&r));
        assert!(ctx.is_captured());

        ctx.begin_frame(press_at(5.0, 5.0));
        assert!(!ctx.is_captured());
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState { x: 50.0, y: 50.0, ..Default::default() });
        assert!(!ctx.hover(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!ctx.pointer_over_ui());
        assert!(ctx.hover(&Rect::new(40.0, 40.0, 20.0, 20.0)));
        assert!(ctx.pointer_over_ui());
    }
}
