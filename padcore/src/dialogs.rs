//! Dialog windows drawn over the main window.
//!
//! egui has no blocking dialogs. Callers keep the dialog state, call these
//! every frame while it is up, and disable the rest of the window meanwhile.

use crate::dither;
use crate::storage::{BrowserMode, FileBrowser};
use crate::theme::PadColors;
use crate::widgets::FileListItem;
use egui::{Align2, Context, Key};
use std::path::PathBuf;

/// How the user left the file browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    Cancelled,
    Chosen(PathBuf),
}

/// Draw the open/save browser. Returns `Some` on the frame the user finishes.
pub fn file_browser_window(ctx: &Context, browser: &mut FileBrowser) -> Option<BrowserOutcome> {
    let (title, action) = match browser.mode {
        BrowserMode::Open => ("Open", "open"),
        BrowserMode::Save => ("Save", "save"),
    };

    let mut outcome = None;
    let resp = egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("location:");
                ui.label(browser.current_dir.to_string_lossy().to_string());
            });
            ui.separator();

            let mut clicked = None;
            let mut activated = None;
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (idx, entry) in browser.entries.iter().enumerate() {
                        let response = ui.add(
                            FileListItem::new(entry).selected(browser.selected_index == Some(idx)),
                        );
                        if response.double_clicked() {
                            activated = Some(idx);
                        } else if response.clicked() {
                            clicked = Some(idx);
                        }
                    }
                });
            if let Some(idx) = clicked {
                browser.select(idx);
            }
            if let Some(idx) = activated {
                if let Some(path) = browser.activate(idx) {
                    outcome = Some(BrowserOutcome::Chosen(path));
                }
            }

            if let Some(err) = &browser.error {
                ui.label(egui::RichText::new(err).color(PadColors::BLACK).italics());
            }
            ui.separator();

            let mut confirm = false;
            egui::Grid::new("file_browser_fields").num_columns(2).show(ui, |ui| {
                ui.label("name:");
                let field = ui.text_edit_singleline(&mut browser.filename);
                if field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    confirm = true;
                }
                ui.end_row();
                ui.label("show:");
                ui.label(browser.filter_label.as_str());
                ui.end_row();
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("cancel").clicked() {
                    outcome = Some(BrowserOutcome::Cancelled);
                }
                let label = if browser.pending_folder().is_some() { "open folder" } else { action };
                if ui.button(label).clicked() {
                    confirm = true;
                }
            });

            if confirm && outcome.is_none() {
                if let Some(path) = browser.confirm() {
                    outcome = Some(BrowserOutcome::Chosen(path));
                }
            }
        });
    if let Some(r) = &resp {
        dither::draw_window_shadow(ctx, r.response.rect);
    }

    if outcome.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
        outcome = Some(BrowserOutcome::Cancelled);
    }
    outcome
}

/// Draw a message box with a single "ok" button. Returns `true` once dismissed.
pub fn message_window(ctx: &Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;
    let resp = egui::Window::new(title)
        .id(egui::Id::new("padcore_message"))
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("ok").clicked() {
                    dismissed = true;
                }
            });
        });
    if let Some(r) = &resp {
        dither::draw_window_shadow(ctx, r.response.rect);
    }
    dismissed || ctx.input(|i| i.key_pressed(Key::Escape))
}
