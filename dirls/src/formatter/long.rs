use super::permissions::format_permissions;
use super::timestamp::format_timestamp;
use super::FileFormatter;
use crate::config::{PermissionFormat, TimeZoneChoice};
use crate::entry::{DirectoryEntry, EntryMetadata};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Permissions,
    Modified,
    Size,
    Name,
}

const COLUMNS: [Column; 4] = [
    Column::Permissions,
    Column::Modified,
    Column::Size,
    Column::Name,
];

const SEPARATOR: &str = "\t";

/// `<perm3>\t<yyyy-MM-dd HH:mm:ss>\t<size>\t<name>`, one line per entry.
pub struct LongFormatter {
    pub permission_format: PermissionFormat,
    pub time_zone: TimeZoneChoice,
}

impl LongFormatter {
    pub fn new(permission_format: PermissionFormat, time_zone: TimeZoneChoice) -> Self {
        Self {
            permission_format,
            time_zone,
        }
    }

    fn render_column(
        &self,
        entry: &DirectoryEntry,
        metadata: &EntryMetadata,
        column: Column,
    ) -> String {
        match column {
            Column::Permissions => {
                format_permissions(&metadata.permissions, self.permission_format)
            }
            Column::Modified => format_timestamp(metadata.modified, self.time_zone),
            Column::Size => metadata.size.to_string(),
            Column::Name => entry.name.clone(),
        }
    }
}

impl FileFormatter for LongFormatter {
    fn format_files(&self, files: &[DirectoryEntry]) -> Vec<String> {
        files
            .iter()
            .map(|entry| {
                let metadata = entry.metadata.clone().unwrap_or_default();
                COLUMNS
                    .iter()
                    .map(|&column| self.render_column(entry, &metadata, column))
                    .collect::<Vec<_>>()
                    .join(SEPARATOR)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryPermissions;
    use std::time::{Duration, UNIX_EPOCH};

    fn entry(name: &str, size: u64, secs: u64, r: bool, w: bool, x: bool) -> DirectoryEntry {
        DirectoryEntry::with_metadata(
            name,
            EntryMetadata {
                permissions: EntryPermissions {
                    readable: r,
                    writable: w,
                    executable: x,
                },
                modified: UNIX_EPOCH + Duration::from_secs(secs),
                size,
            },
        )
    }

    #[test]
    fn binary_layout() {
        let formatter = LongFormatter::new(PermissionFormat::Binary, TimeZoneChoice::Utc);
        let lines = formatter.format_files(&[entry("b.txt", 10, 1_704_067_200, true, true, false)]);
        assert_eq!(lines, ["110\t2024-01-01 00:00:00\t10\tb.txt"]);
    }

    #[test]
    fn symbolic_layout() {
        let formatter = LongFormatter::new(PermissionFormat::Symbolic, TimeZoneChoice::Utc);
        let lines = formatter.format_files(&[
            entry("a.txt", 5, 1_704_153_600, true, false, false),
            entry("run", 0, 0, true, false, true),
        ]);
        assert_eq!(
            lines,
            [
                "r--\t2024-01-02 00:00:00\t5\ta.txt",
                "r-x\t1970-01-01 00:00:00\t0\trun",
            ]
        );
    }

    #[test]
    fn name_is_always_the_last_field() {
        let formatter = LongFormatter::new(PermissionFormat::Binary, TimeZoneChoice::Utc);
        let lines = formatter.format_files(&[entry("with space", 1, 0, false, false, false)]);
        let fields: Vec<&str> = lines[0].split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[3], "with space");
        assert_eq!(fields[0], "000");
    }

    #[test]
    fn missing_metadata_uses_defaults() {
        let formatter = LongFormatter::new(PermissionFormat::Symbolic, TimeZoneChoice::Utc);
        let lines = formatter.format_files(&[DirectoryEntry::new("bare")]);
        assert_eq!(lines, ["---\t1970-01-01 00:00:00\t0\tbare"]);
    }

    #[test]
    fn out_of_range_mtime_does_not_abort_the_listing() {
        let formatter = LongFormatter::new(PermissionFormat::Binary, TimeZoneChoice::Utc);
        let lines = formatter.format_files(&[
            entry("far", 7, 10_000_000_000_000, true, false, false),
            entry("near", 1, 1_704_067_200, true, true, false),
        ]);
        assert_eq!(
            lines,
            [
                "100\t1970-01-01 00:00:00\t7\tfar",
                "110\t2024-01-01 00:00:00\t1\tnear",
            ]
        );
    }
}
