//! Failures reading or writing the document.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File failures surfaced to the user. `Display` is the dialog message.
#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("Error opening file: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("Error saving file: {source}")]
    Save { path: PathBuf, source: io::Error },
}

impl NotepadError {
    pub fn path(&self) -> &Path {
        match self {
            NotepadError::Open { path, .. } | NotepadError::Save { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotepadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_lead_with_the_operation() {
        let open = NotepadError::Open {
            path: PathBuf::from("a.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(open.to_string(), "Error opening file: no such file");
        assert_eq!(open.path(), Path::new("a.txt"));

        let save = NotepadError::Save {
            path: PathBuf::from("b.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(save.to_string(), "Error saving file: denied");
        assert_eq!(save.path(), Path::new("b.txt"));
    }
}
