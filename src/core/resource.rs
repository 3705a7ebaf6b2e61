//! Fail-fast file reading.
//!
//! Two tempting shortcuts are deliberately not taken here:
//! returning an empty string when the file is missing (the caller cannot
//! tell a missing file from an empty one), and checking existence before
//! opening (races against the filesystem and still hides the failure).
//! The file is opened directly and any failure is re-signaled with a
//! message the caller can act on.

use crate::utils::error::{GuardrailError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Read the full text contents of the file at `path`.
///
/// The handle is scoped to this call and released when it returns,
/// whether the read succeeded or failed. A missing file is always an
/// error (`ResourceNotFound`), never `Ok("")`.
pub fn read_text(path: &str) -> Result<String> {
    let mut file = File::open(path).map_err(|e| open_failure(path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| GuardrailError::ResourceAccessFailure {
            path: path.to_string(),
            source: e,
        })?;

    tracing::debug!("Read {} bytes from '{}'", contents.len(), path);
    Ok(contents)
}

fn open_failure(path: &str, source: std::io::Error) -> GuardrailError {
    match source.kind() {
        // Re-signal without the io chain; the kind already says what
        // happened and the message carries what the caller should check.
        ErrorKind::NotFound => GuardrailError::ResourceNotFound {
            path: path.to_string(),
        },
        _ => GuardrailError::ResourceAccessFailure {
            path: path.to_string(),
            source,
        },
    }
}

pub trait ResourceReader: Send + Sync {
    fn read_text(&self, path: &str) -> Result<String>;
}

/// Filesystem-backed reader, optionally rooted at a base directory.
#[derive(Debug, Clone, Default)]
pub struct LocalResource {
    base_path: Option<PathBuf>,
}

impl LocalResource {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl ResourceReader for LocalResource {
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);
        read_text(&full_path.to_string_lossy())
    }
}
