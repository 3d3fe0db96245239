//! Widgets for the notepad window and its file browser.

use crate::dither;
use crate::storage::FileEntry;
use crate::theme::PadColors;
use egui::{Align, Align2, FontId, Layout, Response, Sense, Stroke, Ui, Widget};
use std::borrow::Cow;

const ROW_HEIGHT: f32 = 20.0;

/// Bottom strip under the editor: `left` flush left, `right` flush right,
/// separated from the editor by a single rule.
pub fn status_bar(ui: &mut Ui, left: &str, right: &str) {
    let rule = ui.max_rect().x_range();
    let top = ui.max_rect().top();
    ui.painter().hline(rule, top, Stroke::new(1.0, PadColors::BLACK));
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(left);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(right);
        });
    });
}

/// What a listing row stands for; decides its icon and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Parent,
    Folder,
    File,
}

impl RowKind {
    fn of(entry: &FileEntry) -> Self {
        if entry.is_parent() {
            RowKind::Parent
        } else if entry.is_directory {
            RowKind::Folder
        } else {
            RowKind::File
        }
    }

    fn icon(self) -> &'static str {
        match self {
            RowKind::Parent => "⬆",
            RowKind::Folder => "📁",
            RowKind::File => "📄",
        }
    }
}

/// Text shown for a row. Folders get a trailing slash so they read apart
/// from extensionless files.
fn row_label(entry: &FileEntry) -> Cow<'_, str> {
    match RowKind::of(entry) {
        RowKind::Parent => Cow::Borrowed("up one level"),
        RowKind::Folder => Cow::Owned(format!("{}/", entry.name)),
        RowKind::File => Cow::Borrowed(entry.name.as_str()),
    }
}

/// One row of the file browser listing.
pub struct FileListItem<'a> {
    entry: &'a FileEntry,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(entry: &'a FileEntry) -> Self {
        Self { entry, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for FileListItem<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), ROW_HEIGHT), Sense::click());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let kind = RowKind::of(self.entry);
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, PadColors::WHITE);
        let ink = if self.selected {
            dither::draw_dither_selection(painter, rect);
            PadColors::WHITE
        } else {
            if response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }
            PadColors::BLACK
        };

        let font = FontId::proportional(12.0);
        let y = rect.center().y;
        painter.text(egui::pos2(rect.min.x + 12.0, y), Align2::CENTER_CENTER, kind.icon(), font.clone(), ink);
        painter.text(egui::pos2(rect.min.x + 24.0, y), Align2::LEFT_CENTER, row_label(self.entry), font, ink);

        // The way out sits above the listing proper.
        if kind == RowKind::Parent {
            painter.hline(rect.x_range(), rect.bottom() - 0.5, Stroke::new(1.0, PadColors::BLACK));
        }

        response
    }
}
