use crate::config::{PermissionFormat, TimeZoneChoice, UnreadablePolicy};
use crate::entry::DirectoryEntry;
use crate::error::{DirlsError, Result};
use crate::formatter::{DefaultFormatter, FileFormatter, LongFormatter};
use crate::sorter::{FileSorter, NameSorter, SortOptions};
use std::path::{Path, PathBuf};

pub trait FileLister {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>>;
}

mod basic;

pub use basic::BasicLister;

/// Everything that shapes one listing. Built once at startup and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub long_format: bool,
    /// Letters instead of digits for the permission column; ignored in short mode.
    pub human_readable_permissions: bool,
    pub reverse_order: bool,
    pub output_target: Option<PathBuf>,
    pub time_zone: TimeZoneChoice,
    pub unreadable_directory: UnreadablePolicy,
}

impl ListingOptions {
    fn permission_format(&self) -> PermissionFormat {
        if self.human_readable_permissions {
            PermissionFormat::Symbolic
        } else {
            PermissionFormat::Binary
        }
    }

    fn formatter(&self) -> Box<dyn FileFormatter> {
        if self.long_format {
            Box::new(LongFormatter::new(self.permission_format(), self.time_zone))
        } else {
            Box::new(DefaultFormatter)
        }
    }
}

/// Enumerates `directory` once, then stats, sorts and renders every entry.
///
/// A directory that cannot be enumerated is an error unless the options ask
/// for the permissive behaviour, in which case the listing is empty.
pub fn list(
    directory: &Path,
    options: &ListingOptions,
    lister: &dyn FileLister,
) -> Result<Vec<String>> {
    let paths = match lister.list_files(directory) {
        Ok(paths) => paths,
        Err(DirlsError::DirectoryAccess { path, source })
            if options.unreadable_directory == UnreadablePolicy::Empty =>
        {
            log::debug!(
                "treating unreadable {} as empty: {}",
                path.display(),
                source
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    let mut entries: Vec<DirectoryEntry> = paths
        .iter()
        .map(|path| DirectoryEntry::from_path(path, options.long_format))
        .collect();

    NameSorter.sort_files(
        &mut entries,
        SortOptions {
            reverse: options.reverse_order,
        },
    );

    Ok(options.formatter().format_files(&entries))
}
