use crate::{
    common::parser::Tokens, Dialect, Drive, PathKind, Platform, Result, UnixPath, WindowsDialect,
    WindowsPath,
};
use std::fmt;

/// Represents a path whose dialect is only known at runtime, one of:
///
/// * [`UnixPath`]
/// * [`WindowsPath`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypedPath {
    Unix(UnixPath),
    Windows(WindowsPath),
}

impl TypedPath {
    /// Parses `text`, guessing its dialect. If the text starts with a drive such as `C:` or with
    /// a `\`, it is parsed as a [`WindowsPath`]; otherwise it is parsed as a [`UnixPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::TypedPath;
    ///
    /// assert!(TypedPath::new(r"C:\some\path\to\file.txt").unwrap().is_windows());
    /// assert!(TypedPath::new(r"\some\path\to\file.txt").unwrap().is_windows());
    /// assert!(TypedPath::new("/some/path/to/file.txt").unwrap().is_unix());
    ///
    /// // NOTE: If we don't start with a backslash, it's too difficult to
    /// //       determine and we therefore just assume a Unix/POSIX path.
    /// assert!(TypedPath::new(r"some\path\to\file.txt").unwrap().is_unix());
    /// assert!(TypedPath::new("file.txt").unwrap().is_unix());
    /// assert!(TypedPath::new("").unwrap().is_unix());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let has_drive = matches!(
            WindowsDialect::tokenize(text),
            Ok(Tokens { drive: Some(_), .. })
        );

        if has_drive || text.starts_with('\\') {
            Self::parse(Platform::Windows, text)
        } else {
            Self::parse(Platform::Unix, text)
        }
    }

    /// Parses `text` using the syntax of `platform`
    pub fn parse(platform: Platform, text: &str) -> Result<Self> {
        match platform {
            Platform::Unix => UnixPath::parse(text).map(Self::Unix),
            Platform::Windows => WindowsPath::parse(text).map(Self::Windows),
        }
    }

    /// Builds a path for `platform` from its parts; see
    /// [`Path::from_parts`](crate::Path::from_parts).
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{PathError, PathKind, Platform, TypedPath};
    ///
    /// let path =
    ///     TypedPath::from_parts(Platform::Windows, PathKind::Relative, None, true, ["foo"], false)
    ///         .unwrap();
    /// assert_eq!(path.to_string(), "/foo");
    ///
    /// assert!(matches!(
    ///     TypedPath::from_parts(Platform::Unix, PathKind::Relative, None, true, ["foo"], false),
    ///     Err(PathError::InvalidPathState { .. })
    /// ));
    /// ```
    pub fn from_parts<I, S>(
        platform: Platform,
        kind: PathKind,
        drive: Option<Drive>,
        anchored: bool,
        atoms: I,
        trailing_separator: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match platform {
            Platform::Unix => {
                UnixPath::from_parts(kind, drive, anchored, atoms, trailing_separator)
                    .map(Self::Unix)
            }
            Platform::Windows => {
                WindowsPath::from_parts(kind, drive, anchored, atoms, trailing_separator)
                    .map(Self::Windows)
            }
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Self::Unix(_) => Platform::Unix,
            Self::Windows(_) => Platform::Windows,
        }
    }

    /// Returns true if this path represents a Unix path.
    #[inline]
    pub fn is_unix(&self) -> bool {
        matches!(self, Self::Unix(_))
    }

    /// Returns true if this path represents a Windows path.
    #[inline]
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows(_))
    }

    pub fn as_unix(&self) -> Option<&UnixPath> {
        match self {
            Self::Unix(path) => Some(path),
            Self::Windows(_) => None,
        }
    }

    pub fn as_windows(&self) -> Option<&WindowsPath> {
        match self {
            Self::Unix(_) => None,
            Self::Windows(path) => Some(path),
        }
    }

    pub fn kind(&self) -> PathKind {
        match self {
            Self::Unix(path) => path.kind(),
            Self::Windows(path) => path.kind(),
        }
    }

    pub fn atoms(&self) -> &[String] {
        match self {
            Self::Unix(path) => path.atoms(),
            Self::Windows(path) => path.atoms(),
        }
    }

    pub fn drive(&self) -> Option<Drive> {
        match self {
            Self::Unix(path) => path.drive(),
            Self::Windows(path) => path.drive(),
        }
    }

    pub fn normalize(&self) -> Self {
        match self {
            Self::Unix(path) => Self::Unix(path.normalize()),
            Self::Windows(path) => Self::Windows(path.normalize()),
        }
    }
}

impl From<UnixPath> for TypedPath {
    #[inline]
    fn from(path: UnixPath) -> Self {
        Self::Unix(path)
    }
}

impl From<WindowsPath> for TypedPath {
    #[inline]
    fn from(path: WindowsPath) -> Self {
        Self::Windows(path)
    }
}

impl fmt::Display for TypedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(path) => fmt::Display::fmt(path, f),
            Self::Windows(path) => fmt::Display::fmt(path, f),
        }
    }
}
