use super::FileFormatter;
use crate::entry::DirectoryEntry;

/// Short listing: one bare name per line.
pub struct DefaultFormatter;

impl FileFormatter for DefaultFormatter {
    fn format_files(&self, files: &[DirectoryEntry]) -> Vec<String> {
        files.iter().map(|entry| entry.name.clone()).collect()
    }
}
