use crate::config::PermissionFormat;
use crate::entry::EntryPermissions;

pub fn format_permissions(perms: &EntryPermissions, format: PermissionFormat) -> String {
    match format {
        PermissionFormat::Binary => [perms.readable, perms.writable, perms.executable]
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect(),
        PermissionFormat::Symbolic => [
            (perms.readable, 'r'),
            (perms.writable, 'w'),
            (perms.executable, 'x'),
        ]
        .iter()
        .map(|&(bit, letter)| if bit { letter } else { '-' })
        .collect(),
    }
}
