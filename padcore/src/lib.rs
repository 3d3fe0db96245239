//! padcore: shared library for the notepad window

pub mod dialogs;
pub mod dither;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use dialogs::BrowserOutcome;
pub use storage::{BrowserMode, FileBrowser};
pub use theme::PadTheme;
