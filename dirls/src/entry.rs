use std::fs;
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryPermissions {
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub permissions: EntryPermissions,
    pub modified: SystemTime,
    pub size: u64,
}

impl Default for EntryMetadata {
    fn default() -> Self {
        Self {
            permissions: EntryPermissions::default(),
            modified: SystemTime::UNIX_EPOCH,
            size: 0,
        }
    }
}

/// One object directly inside the listed directory. `metadata` is only
/// collected for long listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub metadata: Option<EntryMetadata>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(name: impl Into<String>, metadata: EntryMetadata) -> Self {
        Self {
            name: name.into(),
            metadata: Some(metadata),
        }
    }

    pub fn from_path(path: &Path, collect_metadata: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        if collect_metadata {
            Self::with_metadata(name, collect_entry_metadata(path))
        } else {
            Self::new(name)
        }
    }
}

/// Never fails: every attribute that cannot be queried falls back to its
/// `EntryMetadata::default()` value on its own.
pub fn collect_entry_metadata(path: &Path) -> EntryMetadata {
    let permissions = EntryPermissions {
        readable: can_read(path),
        writable: can_write(path),
        executable: can_execute(path),
    };

    let (modified, size) = match fs::metadata(path) {
        Ok(meta) => {
            let modified = meta.modified().unwrap_or_else(|err| {
                log::debug!("no mtime for {}: {}", path.display(), err);
                SystemTime::UNIX_EPOCH
            });
            (modified, meta.len())
        }
        Err(err) => {
            log::debug!("stat failed for {}: {}", path.display(), err);
            (SystemTime::UNIX_EPOCH, 0)
        }
    };

    EntryMetadata {
        permissions,
        modified,
        size,
    }
}

#[cfg(unix)]
fn check_access(path: &Path, mode: libc::c_int) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

#[cfg(unix)]
fn can_read(path: &Path) -> bool {
    check_access(path, libc::R_OK)
}

#[cfg(unix)]
fn can_write(path: &Path) -> bool {
    check_access(path, libc::W_OK)
}

#[cfg(unix)]
fn can_execute(path: &Path) -> bool {
    check_access(path, libc::X_OK)
}

#[cfg(not(unix))]
fn can_read(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

#[cfg(not(unix))]
fn can_write(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn can_execute(path: &Path) -> bool {
    if path.is_dir() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            matches!(
                ext.to_ascii_lowercase().as_str(),
                "exe" | "bat" | "cmd" | "com"
            )
        })
        .unwrap_or(false)
}
