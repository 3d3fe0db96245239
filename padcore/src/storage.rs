//! File browser state for the open and save dialogs.
//!
//! The browser only lists what is on disk; reading and writing documents is
//! left to the application.

use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Which dialog the browser is backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMode {
    Open,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileEntry {
    /// The `..` row leading out of the listed directory.
    pub fn is_parent(&self) -> bool {
        self.is_directory && self.name == ".."
    }
}

/// Directory listing plus the filename being typed.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub mode: BrowserMode,
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    /// Extension shown in the listing, without the dot. Empty shows all files.
    pub extension: String,
    /// Human readable description of the filter, e.g. "Text Files (*.txt)".
    pub filter_label: String,
    pub filename: String,
    /// Last listing failure, shown inside the dialog.
    pub error: Option<String>,
}

impl FileBrowser {
    /// `start_dir` is made absolute so the `..` row always leads somewhere.
    /// A directory that cannot be resolved is kept as given and reported by
    /// the listing.
    pub fn new(mode: BrowserMode, start_dir: PathBuf) -> Self {
        let current_dir = std::fs::canonicalize(&start_dir)
            .or_else(|_| std::env::current_dir().map(|cwd| cwd.join(&start_dir)))
            .unwrap_or(start_dir);
        let mut browser = Self {
            mode,
            current_dir,
            entries: Vec::new(),
            selected_index: None,
            extension: String::new(),
            filter_label: "All Files".to_string(),
            filename: String::new(),
            error: None,
        };
        browser.refresh();
        browser
    }

    pub fn with_filter(mut self, extension: &str, label: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self.filter_label = label.to_string();
        self.refresh();
        self
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    pub fn refresh(&mut self) {
        self.selected_index = None;
        match list_dir(&self.current_dir, &self.extension) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                debug!("{e}");
                self.entries = parent_entry(&self.current_dir).into_iter().collect();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            debug!("browsing {}", path.display());
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// Single click: highlight the row; a file's name goes into the filename field.
    pub fn select(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else { return };
        if !entry.is_directory {
            self.filename = entry.name.clone();
        }
        self.selected_index = Some(index);
    }

    /// Double click: enter a directory, or pick a file.
    pub fn activate(&mut self, index: usize) -> Option<PathBuf> {
        let entry = self.entries.get(index)?.clone();
        if entry.is_directory {
            self.navigate_to(entry.path);
            None
        } else {
            self.filename = entry.name;
            Some(entry.path)
        }
    }

    /// Path named by the filename field, relative to the current directory.
    /// Absolute names are taken as they are.
    pub fn chosen_path(&self) -> Option<PathBuf> {
        let name = self.filename.trim();
        if name.is_empty() {
            None
        } else {
            Some(self.current_dir.join(name))
        }
    }

    /// A highlighted folder that the confirm button would enter, because no
    /// name has been typed.
    pub fn pending_folder(&self) -> Option<&FileEntry> {
        if !self.filename.trim().is_empty() {
            return None;
        }
        self.selected_entry().filter(|e| e.is_directory)
    }

    /// Confirm button: a directory name or a highlighted folder navigates,
    /// anything else is the answer.
    pub fn confirm(&mut self) -> Option<PathBuf> {
        if let Some(folder) = self.pending_folder() {
            let path = folder.path.clone();
            self.navigate_to(path);
            return None;
        }
        let path = self.chosen_path()?;
        if path.is_dir() {
            self.filename.clear();
            self.navigate_to(path);
            None
        } else {
            Some(path)
        }
    }
}

/// List `dir`: a `..` entry when there is a parent, then directories, then
/// files matching `extension` (case-insensitive), each group sorted by name.
/// Hidden entries are skipped.
pub fn list_dir(dir: &Path, extension: &str) -> Result<Vec<FileEntry>> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| StorageError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let is_directory = path.is_dir();
        if !is_directory && !matches_extension(&path, extension) {
            continue;
        }

        let entry = FileEntry { name, path, is_directory };
        if is_directory {
            dirs.push(entry);
        } else {
            files.push(entry);
        }
    }

    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());

    let mut entries: Vec<FileEntry> = parent_entry(dir).into_iter().collect();
    entries.extend(dirs);
    entries.extend(files);
    Ok(entries)
}

/// True when `extension` is empty or equals the path's extension, ignoring case.
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    if extension.is_empty() {
        return true;
    }
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn parent_entry(dir: &Path) -> Option<FileEntry> {
    let parent = dir.parent().filter(|p| !p.as_os_str().is_empty())?;
    Some(FileEntry {
        name: "..".to_string(),
        path: parent.to_path_buf(),
        is_directory: true,
    })
}

/// The user's documents directory, or the working directory when unknown.
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
