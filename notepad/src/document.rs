//! The text buffer and the file it was last read from or written to.

use crate::error::{NotepadError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Document {
    pub text: String,
    /// Only used for the window title; edits do not clear it.
    pub path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Replace the whole buffer with the contents of `path`.
    /// On failure the buffer and path are left as they were.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let text = read_text(path).map_err(|source| NotepadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.text = text;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the buffer to `path`, with `extension` appended when the name
    /// lacks it. Returns the path actually written.
    pub fn save(&mut self, path: &Path, extension: &str) -> Result<PathBuf> {
        let target = enforce_extension(path, extension);
        write_text(&target, &self.text).map_err(|source| NotepadError::Save {
            path: target.clone(),
            source,
        })?;
        self.path = Some(target.clone());
        Ok(target)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Bytes that are not valid UTF-8 become U+FFFD rather than failing the open.
fn read_text(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_text(path: &Path, text: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(text.as_bytes())?;
    // Dropping a BufWriter swallows flush errors.
    writer.flush()
}

/// `path` with `.extension` appended to the file name, unless the name
/// already ends with it (ignoring case).
pub fn enforce_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    let suffix = format!(".{}", extension.to_lowercase());
    let mut name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    if name.to_string_lossy().to_lowercase().ends_with(&suffix) {
        return path.to_path_buf();
    }

    name.push(".");
    name.push(extension);
    path.with_file_name(name)
}
