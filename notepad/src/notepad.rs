//! Window state and command handling, independent of rendering.

use crate::command::Command;
use crate::config::NotepadConfig;
use crate::document::Document;
use crate::error::NotepadError;
use log::{debug, info, warn};
use padcore::{BrowserMode, BrowserOutcome, FileBrowser};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

pub struct Notepad {
    pub config: NotepadConfig,
    pub document: Document,
    /// The open or save dialog, while it is up.
    pub browser: Option<FileBrowser>,
    /// Directory the next dialog starts in. Follows the user's browsing.
    browse_dir: PathBuf,
    errors: VecDeque<String>,
    exit_requested: bool,
}

impl Notepad {
    pub fn new(config: NotepadConfig) -> Self {
        let browse_dir = config.start_dir.clone();
        Self {
            config,
            document: Document::new(),
            browser: None,
            browse_dir,
            errors: VecDeque::new(),
            exit_requested: false,
        }
    }

    /// "Simple Notepad", or "Simple Notepad - notes.txt" once a file is named.
    pub fn title(&self) -> String {
        match self.document.file_name() {
            Some(name) => format!("{} - {}", self.config.app_name, name),
            None => self.config.app_name.clone(),
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        debug!("command {:?}", command);
        match command {
            Command::Open => self.show_dialog(BrowserMode::Open),
            Command::Save => self.show_dialog(BrowserMode::Save),
            Command::Exit => self.exit_requested = true,
        }
    }

    fn show_dialog(&mut self, mode: BrowserMode) {
        if self.is_modal() {
            return;
        }
        let filename = match mode {
            BrowserMode::Open => String::new(),
            BrowserMode::Save => self.document.file_name().unwrap_or_default(),
        };
        let browser = FileBrowser::new(mode, self.browse_dir.clone())
            .with_filter(&self.config.extension, &self.config.filter_label)
            .with_filename(&filename);
        self.browser = Some(browser);
    }

    /// Close the dialog and carry out whatever the user picked.
    pub fn resolve_dialog(&mut self, outcome: BrowserOutcome) {
        let Some(browser) = self.browser.take() else { return };
        self.browse_dir = browser.current_dir;
        match outcome {
            BrowserOutcome::Cancelled => debug!("{:?} dialog cancelled", browser.mode),
            BrowserOutcome::Chosen(path) => match browser.mode {
                BrowserMode::Open => self.open_file(&path),
                BrowserMode::Save => self.save_file(&path),
            },
        }
    }

    pub fn open_file(&mut self, path: &Path) {
        match self.document.load(path) {
            Ok(()) => info!("opened {}", path.display()),
            Err(e) => self.report(e),
        }
    }

    pub fn save_file(&mut self, path: &Path) {
        match self.document.save(path, &self.config.extension) {
            Ok(written) => info!("saved {}", written.display()),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: NotepadError) {
        warn!("{}: {}", err.path().display(), err);
        self.errors.push_back(err.to_string());
    }

    /// The error notification to show, oldest first.
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// A dialog or error notification is up; the editor and menu are disabled.
    pub fn is_modal(&self) -> bool {
        self.browser.is_some() || !self.errors.is_empty()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn notepad_in(dir: &Path) -> Notepad {
        Notepad::new(NotepadConfig {
            start_dir: dir.to_path_buf(),
            ..NotepadConfig::default()
        })
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let notepad = notepad_in(dir.path());
        assert_eq!(notepad.document.text, "");
        assert_eq!(notepad.title(), "Simple Notepad");
        assert!(!notepad.is_modal());
        assert!(!notepad.exit_requested());
    }

    #[test]
    fn test_save_appends_extension_and_retitles() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "hello world".to_string();

        notepad.dispatch(Command::Save);
        assert_eq!(notepad.browser.as_ref().map(|b| b.mode), Some(BrowserMode::Save));
        notepad.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("test")));

        assert_eq!(fs::read_to_string(dir.path().join("test.txt")).unwrap(), "hello world");
        assert!(!dir.path().join("test").exists());
        assert_eq!(notepad.title(), "Simple Notepad - test.txt");
        assert!(notepad.browser.is_none());
        assert_eq!(notepad.errors.len(), 0);
    }

    #[test]
    fn test_open_replaces_buffer_and_retitles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test.txt"), "hello world").unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "scratch".to_string();

        notepad.dispatch(Command::Open);
        assert_eq!(notepad.browser.as_ref().map(|b| b.mode), Some(BrowserMode::Open));
        notepad.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("test.txt")));

        assert_eq!(notepad.document.text, "hello world");
        assert_eq!(notepad.title(), "Simple Notepad - test.txt");
    }

    #[test]
    fn test_save_then_open_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let text = "line one\nline two\n\ttabbed";
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = text.to_string();
        notepad.dispatch(Command::Save);
        notepad.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("trip.TXT")));

        let mut other = notepad_in(dir.path());
        other.dispatch(Command::Open);
        other.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("trip.TXT")));
        assert_eq!(other.document.text, text);
        assert_eq!(file_count(dir.path()), 1);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "old").unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "new".to_string();

        notepad.dispatch(Command::Save);
        notepad.resolve_dialog(BrowserOutcome::Chosen(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_cancel_open_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "typed".to_string();

        notepad.dispatch(Command::Open);
        notepad.resolve_dialog(BrowserOutcome::Cancelled);
        assert_eq!(notepad.document.text, "typed");
        assert_eq!(notepad.title(), "Simple Notepad");
        assert!(!notepad.is_modal());
    }

    #[test]
    fn test_cancel_save_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "typed".to_string();

        notepad.dispatch(Command::Save);
        notepad.resolve_dialog(BrowserOutcome::Cancelled);
        assert_eq!(file_count(dir.path()), 0);
        assert_eq!(notepad.title(), "Simple Notepad");
    }

    #[test]
    fn test_open_missing_file_reports_one_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "keep".to_string();

        notepad.dispatch(Command::Open);
        notepad.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("missing.txt")));

        assert_eq!(notepad.errors.len(), 1);
        let message = notepad.current_error().unwrap();
        assert!(message.starts_with("Error opening file: "));
        assert!(message.len() > "Error opening file: ".len());
        assert_eq!(notepad.document.text, "keep");
        assert_eq!(notepad.title(), "Simple Notepad");
        assert!(notepad.is_modal());

        notepad.dismiss_error();
        assert_eq!(notepad.errors.len(), 0);
        assert!(!notepad.is_modal());
    }

    #[test]
    fn test_open_non_utf8_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("old.txt"), [0xffu8, 0xfe, b'h', b'i']).unwrap();
        let mut notepad = notepad_in(dir.path());

        notepad.dispatch(Command::Open);
        notepad.resolve_dialog(BrowserOutcome::Chosen(dir.path().join("old.txt")));

        assert_eq!(notepad.errors.len(), 0);
        assert!(notepad.document.text.contains('\u{FFFD}'));
        assert!(notepad.document.text.ends_with("hi"));
        assert_eq!(notepad.title(), "Simple Notepad - old.txt");
        assert!(!notepad.is_modal());
    }

    #[test]
    fn test_failed_save_keeps_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "x".to_string();

        notepad.save_file(&dir.path().join("missing_dir").join("x"));
        assert_eq!(notepad.errors.len(), 1);
        assert!(notepad.current_error().unwrap().starts_with("Error saving file: "));
        assert_eq!(notepad.title(), "Simple Notepad");
    }

    #[test]
    fn test_commands_ignored_while_dialog_is_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.dispatch(Command::Open);
        notepad.dispatch(Command::Save);
        assert_eq!(notepad.browser.as_ref().map(|b| b.mode), Some(BrowserMode::Open));
    }

    #[test]
    fn test_save_dialog_prefills_current_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("letter.txt"), "dear").unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.open_file(&dir.path().join("letter.txt"));

        notepad.dispatch(Command::Save);
        assert_eq!(notepad.browser.as_ref().map(|b| b.filename.as_str()), Some("letter.txt"));
    }

    #[test]
    fn test_next_dialog_starts_where_the_last_one_ended() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let mut notepad = notepad_in(dir.path());

        notepad.dispatch(Command::Open);
        if let Some(browser) = notepad.browser.as_mut() {
            browser.navigate_to(sub.clone());
        }
        notepad.resolve_dialog(BrowserOutcome::Cancelled);

        notepad.dispatch(Command::Save);
        let expected = fs::canonicalize(&sub).unwrap();
        assert_eq!(notepad.browser.as_ref().map(|b| b.current_dir.clone()), Some(expected));
    }

    #[test]
    fn test_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut notepad = notepad_in(dir.path());
        notepad.document.text = "unsaved".to_string();
        notepad.dispatch(Command::Exit);
        assert!(notepad.exit_requested());
    }
}
