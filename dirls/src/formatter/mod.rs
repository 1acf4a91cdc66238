use crate::entry::DirectoryEntry;

pub trait FileFormatter {
    fn format_files(&self, files: &[DirectoryEntry]) -> Vec<String>;
}

mod default;
mod long;
mod permissions;
mod timestamp;

pub use default::DefaultFormatter;
pub use long::LongFormatter;
