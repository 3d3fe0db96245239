//! The File menu commands and their keyboard shortcuts.

use egui::{Key, KeyboardShortcut, Modifiers};

/// Everything the File menu can ask the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    Exit,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Open, Command::Save, Command::Exit];

    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::Save => "Save",
            Command::Exit => "Exit",
        }
    }

    pub fn shortcut(self) -> KeyboardShortcut {
        let key = match self {
            Command::Open => Key::O,
            Command::Save => Key::S,
            Command::Exit => Key::Q,
        };
        KeyboardShortcut::new(Modifiers::COMMAND, key)
    }

    /// Menu text with the shortcut right of the label, e.g. "Open       ⌘O".
    pub fn menu_text(self, ctx: &egui::Context) -> String {
        format!("{:<10} {}", self.label(), ctx.format_shortcut(&self.shortcut()))
    }
}
