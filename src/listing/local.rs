//! Directory listing backed by the local filesystem.

use std::path::Path;

use super::{DirectoryEntry, FileSystem, ListError};

/// Reads listings straight from `std::fs`. Nothing is cached; every call
/// re-reads the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
        let metadata = std::fs::metadata(path).map_err(|e| ListError::from_io(path, e))?;

        if !metadata.is_dir() {
            return Err(ListError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let reader = std::fs::read_dir(path).map_err(|e| ListError::from_io(path, e))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| ListError::from_io(path, e))?;

            // Does not follow symlinks.
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("entry vanished while listing: {}", entry.path().display());
                    continue;
                }
                Err(e) => return Err(ListError::from_io(&entry.path(), e)),
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let modified = metadata.modified().ok();

            entries.push(if metadata.is_dir() {
                DirectoryEntry::directory(name, modified)
            } else {
                DirectoryEntry::file(name, metadata.len(), modified)
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
