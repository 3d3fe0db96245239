//! The notepad window: one buffer and a File menu.
//!
//! Rendering only. Every menu item and shortcut becomes a [`Command`] handed
//! to [`Notepad::dispatch`]; dialogs report back through
//! [`Notepad::resolve_dialog`].

use crate::command::Command;
use crate::config::NotepadConfig;
use crate::notepad::Notepad;
use egui::Context;
use padcore::dialogs::{file_browser_window, message_window};
use padcore::storage::matches_extension;
use padcore::theme::{consume_special_keys, menu_bar, PadColors};
use padcore::widgets::status_bar;
use std::path::PathBuf;

pub struct NotepadApp {
    notepad: Notepad,
    /// Title last sent to the native window.
    shown_title: String,
}

impl NotepadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: NotepadConfig) -> Self {
        let notepad = Notepad::new(config);
        let shown_title = notepad.title();
        Self { notepad, shown_title }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        let commands: Vec<Command> = ctx.input_mut(|i| {
            Command::ALL
                .into_iter()
                .filter(|c| i.consume_shortcut(&c.shortcut()))
                .collect()
        });
        for command in commands {
            self.notepad.dispatch(command);
        }
    }

    /// Dropped text files open the same way the Open dialog does.
    fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        let extension = self.notepad.config.extension.as_str();
        let text_file = dropped.into_iter().find(|p| matches_extension(p, extension));
        if let Some(path) = text_file {
            self.notepad.open_file(&path);
        }
    }

    fn render_menu_bar(ui: &mut egui::Ui) -> Option<Command> {
        let mut command = None;
        menu_bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                for item in Command::ALL {
                    if item == Command::Exit {
                        ui.separator();
                    }
                    if ui.button(item.menu_text(ui.ctx())).clicked() {
                        command = Some(item);
                        ui.close_menu();
                    }
                }
            });
        });
        command
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let font = egui::TextStyle::Monospace.resolve(ui.style());
        let row_height = ui.fonts(|f| f.row_height(&font));
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::TextEdit::multiline(&mut self.notepad.document.text)
                    .font(font)
                    .desired_width(available.x)
                    .desired_rows((available.y / row_height).max(4.0) as usize)
                    .frame(false)
                    .show(ui);
            });
    }

    fn render_dialogs(&mut self, ctx: &Context) {
        if let Some(browser) = self.notepad.browser.as_mut() {
            if let Some(outcome) = file_browser_window(ctx, browser) {
                self.notepad.resolve_dialog(outcome);
            }
        }

        if let Some(message) = self.notepad.current_error().map(str::to_owned) {
            if message_window(ctx, "Error", &message) {
                self.notepad.dismiss_error();
            }
        }
    }

    fn sync_title(&mut self, ctx: &Context) {
        let title = self.notepad.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for NotepadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let modal = self.notepad.is_modal();
        if !modal {
            consume_special_keys(ctx, self.notepad.config.tab_spaces);
            self.handle_keyboard(ctx);
            self.handle_dropped_files(ctx);
        }

        let mut command = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal, |ui| {
                command = Self::render_menu_bar(ui);
            });
        });
        if let Some(command) = command {
            self.notepad.dispatch(command);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let doc = &self.notepad.document;
            let name = doc.file_name().unwrap_or_else(|| "untitled".to_string());
            status_bar(ui, &name, &format!("{} lines  |  {} characters", doc.line_count(), doc.char_count()));
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PadColors::WHITE).inner_margin(egui::Margin::same(4.0)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal, |ui| self.render_editor(ui));
            });

        self.render_dialogs(ctx);
        self.sync_title(ctx);

        if self.notepad.exit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
