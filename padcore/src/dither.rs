//! Checkerboard dithering for highlights and window shadows.
//!
//! A dither lets the content underneath a highlight stay readable where a
//! solid fill would hide it.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Offset of the dithered drop shadow behind dialogs.
const SHADOW_OFFSET: f32 = 4.0;

/// Fill every `density`-th pixel of `rect` in a checkerboard.
/// `density` 1 is the tightest pattern; larger values are sparser.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let step = density.max(1) as i32;

    // Pixel grid strictly inside the rect, so the loop needs no bounds check.
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let pixel = Vec2::splat(1.0);
    for y in (y0..y1).step_by(step as usize) {
        let shift = if ((y - y0) / step) % 2 == 0 { 0 } else { step };
        for x in ((x0 + shift)..x1).step_by((step * 2) as usize) {
            painter.rect_filled(Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel), 0.0, color);
        }
    }
}

/// Dense dither for selected list rows.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Sparse dither for hovered rows and buttons.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered drop shadow for a dialog window, painted below the window layer.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("padcore_window_shadow"),
    ));
    let right = Rect::from_min_max(
        Pos2::new(window_rect.max.x, window_rect.min.y + SHADOW_OFFSET),
        Pos2::new(window_rect.max.x + SHADOW_OFFSET, window_rect.max.y + SHADOW_OFFSET),
    );
    let bottom = Rect::from_min_max(
        Pos2::new(window_rect.min.x + SHADOW_OFFSET, window_rect.max.y),
        Pos2::new(window_rect.max.x, window_rect.max.y + SHADOW_OFFSET),
    );
    draw_dither_rect(&painter, right, Color32::BLACK, 1);
    draw_dither_rect(&painter, bottom, Color32::BLACK, 1);
}
