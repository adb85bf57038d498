//! Symbolic permission strings and octal mode parsing

use crate::error::{Error, Result};

/// Permission bits in display order, paired with their letter.
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Format mode bits as a 10-character `drwxrwxrwx`-style string.
///
/// Position 0 is `d` for directories and `-` otherwise. Positions 1-9 hold the
/// owner, group and other read/write/execute letters, or `-` where the bit is
/// clear. Bits outside 0o777 are ignored.
///
/// # Example
///
/// ```rust
/// use filenav::format_permissions;
///
/// assert_eq!(format_permissions(0o755, false), "-rwxr-xr-x");
/// assert_eq!(format_permissions(0o750, true), "drwxr-x---");
/// ```
pub fn format_permissions(mode: u32, is_dir: bool) -> String {
    let mut perms = String::with_capacity(10);
    perms.push(if is_dir { 'd' } else { '-' });
    for (bit, letter) in PERMISSION_BITS {
        perms.push(if mode & bit != 0 { letter } else { '-' });
    }
    perms
}

/// Parse a chmod mode string as a base-8 number.
///
/// Only octal digits are accepted; the value itself is not range-checked.
pub fn parse_mode(mode: &str) -> Result<u32> {
    u32::from_str_radix(mode, 8).map_err(|_| Error::InvalidMode(mode.to_string()))
}
