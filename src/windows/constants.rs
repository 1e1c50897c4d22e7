/// The separator used when printing windows paths
pub const SEPARATOR: char = '/';

/// The separator used when printing windows paths
pub const SEPARATOR_STR: &str = "/";

/// The alternate separator accepted when parsing windows paths
pub const ALT_SEPARATOR: char = '\\';

/// The alternate separator accepted when parsing windows paths
pub const ALT_SEPARATOR_STR: &str = "\\";

/// Separates a drive letter from the rest of the path, as in `C:`
pub const DRIVE_SEPARATOR: char = ':';

/// Characters that are not allowed in atoms, in addition to separators and `\0` through `\x1F`
pub const DISALLOWED_ATOM_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];
