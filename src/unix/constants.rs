/// The separator of path atoms for unix platforms
pub const SEPARATOR: char = '/';

/// The separator of path atoms for unix platforms
pub const SEPARATOR_STR: &str = "/";
