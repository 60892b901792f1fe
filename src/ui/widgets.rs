//! Basic UI widgets: dropdown, checkbox, modal

use macroquad::prelude::*;
use super::theme::*;
use super::{Rect, UiContext};

/// Height of one dropdown row
pub const DROPDOWN_ROW_HEIGHT: f32 = 20.0;

/// Open/closed state of a dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
}

/// Rect of the `index`th item in an open dropdown list below `trigger`
pub fn dropdown_item_rect(trigger: &Rect, index: usize) -> Rect {
    Rect::new(
        trigger.x,
        trigger.bottom() + index as f32 * DROPDOWN_ROW_HEIGHT,
        trigger.w,
        DROPDOWN_ROW_HEIGHT,
    )
}

/// Rect covering the whole open list
pub fn dropdown_list_rect(trigger: &Rect, count: usize) -> Rect {
    Rect::new(trigger.x, trigger.bottom(), trigger.w, count as f32 * DROPDOWN_ROW_HEIGHT)
}

/// Handle input for a dropdown without drawing it.
/// Returns the newly chosen index, if any.
pub fn dropdown_input(
    ctx: &mut UiContext,
    trigger: &Rect,
    state: &mut DropdownState,
    count: usize,
) -> Option<usize> {
    ctx.hover(trigger);
    if state.open {
        let list = dropdown_list_rect(trigger, count);
        ctx.hover(&list);
        if ctx.mouse.left_pressed && !ctx.is_captured() {
            // Any press closes the list; it is only consumed when it lands on the dropdown
            state.open = false;
            if ctx.take_click(&list) {
                let row = ((ctx.mouse.y - list.y) / DROPDOWN_ROW_HEIGHT) as usize;
                return Some(row.min(count.saturating_sub(1)));
            }
            ctx.take_click(trigger);
        }
        None
    } else {
        if ctx.take_click(trigger) {
            state.open = true;
        }
        None
    }
}

/// Draw a dropdown and handle its input.
/// Returns the newly chosen index, if any.
pub fn dropdown(
    ctx: &mut UiContext,
    trigger: Rect,
    state: &mut DropdownState,
    labels: &[&str],
    selected: usize,
) -> Option<usize> {
    let hovered = ctx.mouse.inside(&trigger);
    let choice = dropdown_input(ctx, &trigger, state, labels.len());

    let bg = if hovered { DROPDOWN_TRIGGER_HOVER } else { DROPDOWN_TRIGGER_BG };
    draw_rectangle(trigger.x, trigger.y, trigger.w, trigger.h, bg);
    draw_rectangle_lines(trigger.x, trigger.y, trigger.w, trigger.h, 1.0, DROPDOWN_BORDER);

    let current = choice.unwrap_or(selected);
    if let Some(label) = labels.get(current) {
        draw_text_in(label, &trigger, FONT_SIZE_CONTENT, WHITE);
    }

    // Chevron
    let cx = trigger.right() - 10.0;
    let cy = trigger.center_y();
    draw_triangle(
        Vec2::new(cx - 4.0, cy - 2.0),
        Vec2::new(cx + 4.0, cy - 2.0),
        Vec2::new(cx, cy + 3.0),
        TEXT_COLOR,
    );

    if state.open {
        let list = dropdown_list_rect(&trigger, labels.len());
        draw_rectangle(list.x, list.y, list.w, list.h, DROPDOWN_BG);
        draw_rectangle_lines(list.x, list.y, list.w, list.h, 1.0, DROPDOWN_BORDER);
        for (i, label) in labels.iter().enumerate() {
            let item = dropdown_item_rect(&trigger, i);
            if ctx.mouse.inside(&item) {
                draw_rectangle(item.x, item.y, item.w, item.h, DROPDOWN_HOVER);
            }
            let color = if i == selected { ACCENT_COLOR } else { TEXT_COLOR };
            draw_text_in(label, &item, FONT_SIZE_CONTENT, color);
        }
    }

    choice
}

/// Checkbox square for a checkbox row starting at `rect`
pub fn checkbox_box(rect: &Rect) -> Rect {
    let size = (rect.h - 4.0).max(8.0).min(16.0);
    Rect::new(rect.x, rect.center_y() - size * 0.5, size, size)
}

/// Draw a labeled checkbox. Returns true when toggled this frame.
pub fn checkbox(ctx: &mut UiContext, rect: Rect, label: &str, checked: &mut bool) -> bool {
    let hovered = ctx.hover(&rect);
    let toggled = ctx.take_click(&rect);
    if toggled {
        *checked = !*checked;
    }

    let b = checkbox_box(&rect);
    let bg = if hovered { DROPDOWN_TRIGGER_HOVER } else { DROPDOWN_TRIGGER_BG };
    draw_rectangle(b.x, b.y, b.w, b.h, bg);
    draw_rectangle_lines(b.x, b.y, b.w, b.h, 1.0, DROPDOWN_BORDER);
    if *checked {
        draw_rectangle(b.x + 3.0, b.y + 3.0, b.w - 6.0, b.h - 6.0, ACCENT_COLOR);
    }

    let text_rect = Rect::new(b.right() + 6.0, rect.y, rect.w - b.w - 6.0, rect.h);
    draw_text_in(label, &text_rect, FONT_SIZE_CONTENT, TEXT_COLOR);

    toggled
}

/// Layout of a modal dialog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalLayout {
    pub body: Rect,
    pub close: Rect,
}

pub const MODAL_LINE_HEIGHT: f32 = 20.0;

/// Compute the modal rects for `line_count` lines centered in `screen`
pub fn modal_layout(screen: &Rect, line_count: usize) -> ModalLayout {
    let w = 260.0_f32.min(screen.w - 20.0).max(120.0);
    let h = 44.0 + line_count as f32 * MODAL_LINE_HEIGHT + 12.0;
    let body = screen.centered(w, h);
    let close = Rect::new(body.right() - 26.0, body.y + 4.0, 22.0, 22.0);
    ModalLayout { body, close }
}

/// Hit-test a modal before any widget below it sees the press.
/// Returns true when the close button was clicked.
pub fn modal_input(ctx: &mut UiContext, screen: &Rect, line_count: usize) -> bool {
    let layout = modal_layout(screen, line_count);
    ctx.hover(&layout.body);
    let closed = ctx.take_click(&layout.close);
    // Clicks on the body should not fall through to the scene
    ctx.take_click(&layout.body);
    closed
}

/// Draw a modal with a title and text lines. Input is handled by `modal_input`.
pub fn draw_modal(ctx: &UiContext, screen: Rect, title: &str, lines: &[String]) {
    let layout = modal_layout(&screen, lines.len());

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, MODAL_SCRIM);
    let b = layout.body;
    draw_rectangle(b.x, b.y, b.w, b.h, MODAL_BG);
    draw_rectangle_lines(b.x, b.y, b.w, b.h, 1.0, BORDER_COLOR);

    let header = Rect::new(b.x, b.y, b.w, 30.0);
    draw_rectangle(header.x, header.y, header.w, header.h, HEADER_COLOR);
    draw_text_in(title, &header.offset(8.0, 0.0), FONT_SIZE_HEADER, WHITE);

    let c = layout.close;
    let close_color = if ctx.mouse.inside(&c) { WHITE } else { TEXT_COLOR };
    draw_line(c.x + 6.0, c.y + 6.0, c.right() - 6.0, c.bottom() - 6.0, 2.0, close_color);
    draw_line(c.right() - 6.0, c.y + 6.0, c.x + 6.0, c.bottom() - 6.0, 2.0, close_color);

    let mut y = header.bottom() + 14.0;
    for line in lines {
        let row = Rect::new(b.x + 12.0, y, b.w - 24.0, MODAL_LINE_HEIGHT);
        draw_text_in(line, &row, FONT_SIZE_CONTENT, TEXT_COLOR);
        y += MODAL_LINE_HEIGHT;
    }
}

/// Draw text left-aligned and vertically centered in a rect.
/// Positions are rounded to integer pixels for crisp rendering.
pub fn draw_text_in(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.x + 6.0).round();
    let y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, x, y, font_size, color);
}
