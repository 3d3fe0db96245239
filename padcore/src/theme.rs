//! Notepad theme: plain paper look
//!
//! Black ink on white. 1px black outlines, square corners, no soft shadows.

use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The two colors the window is drawn with.
pub struct PadColors;

impl PadColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Text selection in the editor. Black would hide the selected text.
    pub const SELECTION: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Sizes for the notepad window. Colors are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct PadTheme {
    /// Menu, labels, buttons and dialog fields.
    pub ui_font_size: f32,
    /// Dialog title bars.
    pub title_font_size: f32,
    /// The editing surface, drawn in [`TextStyle::Monospace`].
    pub editor_font_size: f32,
    /// Inner margin of dialogs and spacing between their rows.
    pub padding: f32,
}

impl Default for PadTheme {
    fn default() -> Self {
        Self {
            ui_font_size: 14.0,
            title_font_size: 15.0,
            editor_font_size: 14.0,
            padding: 8.0,
        }
    }
}

impl PadTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Only the styles this window draws with are resized; the rest keep
    /// egui's defaults so every lookup still resolves.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        let ui_font = FontId::new(self.ui_font_size, FontFamily::Proportional);
        style.text_styles.insert(TextStyle::Body, ui_font.clone());
        style.text_styles.insert(TextStyle::Button, ui_font);
        style.text_styles.insert(TextStyle::Heading, FontId::new(self.title_font_size, FontFamily::Proportional));
        style.text_styles.insert(TextStyle::Monospace, FontId::new(self.editor_font_size, FontFamily::Monospace));

        style.visuals = paper_visuals();

        style.spacing.window_margin = egui::Margin::same(self.padding);
        style.spacing.item_spacing = egui::vec2(self.padding / 2.0, self.padding / 2.0);
        style.spacing.button_padding = egui::vec2(self.padding, self.padding / 2.0);
        style
    }
}

fn paper_visuals() -> Visuals {
    let ink = Stroke::new(1.0, PadColors::BLACK);
    let mut visuals = Visuals {
        window_fill: PadColors::WHITE,
        panel_fill: PadColors::WHITE,
        faint_bg_color: PadColors::WHITE,
        extreme_bg_color: PadColors::WHITE,
        window_rounding: Rounding::ZERO,
        menu_rounding: Rounding::ZERO,
        window_stroke: ink,
        // Shadows are dithered by hand, see `dither::draw_window_shadow`
        window_shadow: egui::epaint::Shadow::NONE,
        popup_shadow: egui::epaint::Shadow::NONE,
        ..Visuals::light()
    };
    visuals.selection.bg_fill = PadColors::SELECTION;
    visuals.selection.stroke = ink;
    ink_widgets(&mut visuals.widgets);
    visuals
}

/// Every widget state is white with a black outline. Hovered and pressed
/// widgets get a heavier outline, since there is no fill color to change.
fn ink_widgets(widgets: &mut Widgets) {
    let paint = |state: &mut WidgetVisuals, width: f32| {
        state.bg_fill = PadColors::WHITE;
        state.weak_bg_fill = PadColors::WHITE;
        state.bg_stroke = Stroke::new(width, PadColors::BLACK);
        state.fg_stroke = Stroke::new(1.0, PadColors::BLACK);
        state.rounding = Rounding::ZERO;
    };
    paint(&mut widgets.noninteractive, 1.0);
    paint(&mut widgets.inactive, 1.0);
    paint(&mut widgets.open, 1.0);
    paint(&mut widgets.hovered, 2.0);
    paint(&mut widgets.active, 2.0);
}

/// Menu bar frame: white fill, 1px black outline
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(PadColors::WHITE)
        .stroke(Stroke::new(1.0, PadColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip Cmd+/Cmd- so the editor text is never zoomed, and turn Tab presses
/// into `tab_spaces` spaces of text input. Call at the start of `update()`.
///
/// egui uses Tab for focus cycling, which would move focus out of the
/// editing surface. The Tab key event never reaches egui: focus goes back to
/// whatever held it before the press, and a press with nothing focused
/// leaves nothing focused.
pub fn consume_special_keys(ctx: &egui::Context, tab_spaces: usize) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| matches!(e,
            egui::Event::Key { key: egui::Key::Tab, pressed: true, .. }
        ))
    });

    let focused_before = if tab_pressed {
        ctx.memory(|mem| mem.focused())
    } else {
        None
    };

    ctx.input_mut(|i| {
        let spaces = " ".repeat(tab_spaces);
        i.events.retain_mut(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, pressed: true, modifiers, .. }
                if tab_spaces > 0 && modifiers.is_none() =>
            {
                *event = egui::Event::Text(spaces.clone());
                true
            }
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Text(text) if text.contains('\t') => {
                *text = text.replace('\t', &spaces);
                !text.is_empty()
            }
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });

    if tab_pressed {
        if let Some(id) = focused_before {
            ctx.memory_mut(|mem| mem.request_focus(id));
        } else if let Some(id) = ctx.memory(|mem| mem.focused()) {
            ctx.memory_mut(|mem| mem.surrender_focus(id));
        }
    }
}
