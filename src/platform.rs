use std::fmt;

/// [`Path`](crate::Path) that is native to the platform during compilation
#[cfg(not(windows))]
pub type NativePath = crate::UnixPath;

/// [`Path`](crate::Path) that is native to the platform during compilation
#[cfg(windows)]
pub type NativePath = crate::WindowsPath;

/// Selects which path dialect to use when the choice is made at runtime.
///
/// # Examples
///
/// ```
/// use atom_path::{Platform, TypedPath};
///
/// let path = TypedPath::parse(Platform::Windows, r"C:\Users").unwrap();
/// assert!(path.is_windows());
/// assert_eq!(path.to_string(), "C:/Users");
///
/// assert_eq!(Platform::native().is_windows(), cfg!(windows));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Returns the platform this crate was compiled for. Anything that is not Windows is
    /// treated as Unix.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
        }
    }

    #[inline]
    pub const fn is_unix(self) -> bool {
        matches!(self, Self::Unix)
    }

    #[inline]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
