pub(crate) mod constants;
mod parser;

pub use constants::*;

use crate::{common::parser::Tokens, private, AbsolutePath, Dialect, Path, RelativePath};
use std::fmt;

/// Represents a Unix-specific [`Path`]
pub type UnixPath = Path<UnixDialect>;

/// Represents a Unix-specific [`AbsolutePath`]
pub type UnixAbsolutePath = AbsolutePath<UnixDialect>;

/// Represents a Unix-specific [`RelativePath`]
pub type UnixRelativePath = RelativePath<UnixDialect>;

/// Represents the POSIX path [`Dialect`].
///
/// Atoms are separated by `/` and may contain any other character. There are no drive
/// specifiers and no anchored paths.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnixDialect;

impl private::Sealed for UnixDialect {}

impl Dialect for UnixDialect {
    fn label() -> &'static str {
        "unix"
    }

    #[inline]
    fn is_separator(c: char) -> bool {
        parser::is_separator(c)
    }

    #[inline]
    fn find_invalid_char(_atom: &str) -> Option<char> {
        None
    }

    fn tokenize(text: &str) -> Result<Tokens<'_>, &'static str> {
        parser::parse(text)
    }

    #[inline]
    fn supports_drives() -> bool {
        false
    }

    #[inline]
    fn is_case_insensitive() -> bool {
        false
    }
}

impl fmt::Debug for UnixDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnixDialect").finish()
    }
}

impl fmt::Display for UnixDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnixDialect")
    }
}
