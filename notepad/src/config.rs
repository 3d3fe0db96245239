//! Fixed settings for the notepad window.

use padcore::storage::documents_dir;
use std::path::PathBuf;

pub struct NotepadConfig {
    /// Window title, and the prefix of the title once a file is named.
    pub app_name: String,
    pub window_size: [f32; 2],
    /// Extension shown by the dialogs and enforced on save, without the dot.
    pub extension: String,
    pub filter_label: String,
    /// Where the dialogs start until the user has browsed somewhere else.
    pub start_dir: PathBuf,
    pub editor_font_size: f32,
    /// Spaces inserted for a typed Tab.
    pub tab_spaces: usize,
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            app_name: "Simple Notepad".to_string(),
            window_size: [600.0, 500.0],
            extension: "txt".to_string(),
            filter_label: "Text Files (*.txt)".to_string(),
            start_dir: documents_dir(),
            editor_font_size: 14.0,
            tab_spaces: 4,
        }
    }
}
