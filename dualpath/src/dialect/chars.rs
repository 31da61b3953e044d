//! Character classification shared by both dialects.
//!
//! Every classifier works on raw bytes. All of the characters that carry
//! meaning in a path (separators, dots, colons, drive letters) are ASCII, so
//! positions found by these predicates are always valid `str` slice points.

/// `/`
pub const FORWARD_SLASH: u8 = b'/';

/// `\`
pub const BACKWARD_SLASH: u8 = b'\\';

/// `.`
pub const DOT: u8 = b'.';

/// `:`
pub const COLON: u8 = b':';

/// `?`
pub const QUESTION_MARK: u8 = b'?';

/// Returns `true` for the POSIX separator `/`.
#[must_use]
pub const fn is_posix_separator(byte: u8) -> bool {
    byte == FORWARD_SLASH
}

/// Returns `true` for either Windows separator, `\` or `/`.
#[must_use]
pub const fn is_windows_separator(byte: u8) -> bool {
    byte == FORWARD_SLASH || byte == BACKWARD_SLASH
}

/// Returns `true` for an ASCII letter that can name a Windows drive.
#[must_use]
pub const fn is_drive_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Returns `true` when `bytes` starts with a drive prefix such as `C:`.
#[must_use]
pub fn has_drive_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && is_drive_letter(bytes[0]) && bytes[1] == COLON
}
