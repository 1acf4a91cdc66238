use crate::entry::DirectoryEntry;

#[derive(Clone, Copy, Debug, Default)]
pub struct SortOptions {
    pub reverse: bool,
}

pub trait FileSorter {
    fn sort_files(&self, files: &mut [DirectoryEntry], options: SortOptions);
}

/// Orders entries by name using plain `str` ordering. Names are unique
/// within one directory, so no tie-break is needed.
pub struct NameSorter;

impl FileSorter for NameSorter {
    fn sort_files(&self, files: &mut [DirectoryEntry], options: SortOptions) {
        if options.reverse {
            files.sort_unstable_by(|a, b| b.name.cmp(&a.name));
        } else {
            files.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        }
    }
}
