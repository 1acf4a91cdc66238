use super::FileLister;
use crate::error::{DirlsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One shallow `read_dir`; platform order, no recursion.
pub struct BasicLister;

impl FileLister for BasicLister {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::with_capacity(16);

        let entries = fs::read_dir(directory).map_err(|source| DirlsError::DirectoryAccess {
            path: directory.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry in {}: {}", directory.display(), err);
                    continue;
                }
            };
            let p = entry.path();
            // Skip current and parent dir entries if the underlying FS yields them
            if p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n == "." || n == "..")
                .unwrap_or(false)
            {
                continue;
            }
            files.push(p);
        }

        log::debug!("{} entries in {}", files.len(), directory.display());
        Ok(files)
    }
}
