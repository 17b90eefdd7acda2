//! Directory listing for the details pane.
//!
//! This module reads the immediate entries of a directory through the
//! [`FileSystem`] trait so the projection logic can run against fakes in tests.

mod local;

pub use local::LocalFs;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name without the parent path
    pub name: String,
    /// Last modification time, if the platform reports one
    pub modified: Option<SystemTime>,
    /// Size in bytes; `None` for directories
    pub size: Option<u64>,
    /// Whether the entry is itself a directory
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64, modified: Option<SystemTime>) -> Self {
        Self {
            name: name.into(),
            modified,
            size: Some(size),
            is_dir: false,
        }
    }

    pub fn directory(name: impl Into<String>, modified: Option<SystemTime>) -> Self {
        Self {
            name: name.into(),
            modified,
            size: None,
            is_dir: true,
        }
    }
}

/// Errors that can occur while listing a directory.
#[derive(Error, Debug)]
pub enum ListError {
    /// The specified path does not exist
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found
        path: PathBuf,
    },

    /// The specified path is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that was expected to be a directory
        path: PathBuf,
    },

    /// Permission denied when reading a path
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be read
        path: PathBuf,
    },

    /// Any other I/O error while reading a path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            std::io::ErrorKind::NotFound => ListError::PathNotFound { path },
            std::io::ErrorKind::PermissionDenied => ListError::PermissionDenied { path },
            _ => ListError::Io { path, source },
        }
    }
}

/// Source of directory listings.
pub trait FileSystem {
    /// Enumerate the immediate entries of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListError>;
}
