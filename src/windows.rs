pub(crate) mod constants;
mod parser;

pub use constants::*;

use crate::{
    common::parser::Tokens, private, AbsolutePath, Dialect, Drive, Path, PathKind, RelativePath,
    Result,
};
use std::fmt;

/// Represents a Windows-specific [`Path`]
pub type WindowsPath = Path<WindowsDialect>;

/// Represents a Windows-specific [`AbsolutePath`]
pub type WindowsAbsolutePath = AbsolutePath<WindowsDialect>;

/// Represents a Windows-specific [`RelativePath`]
pub type WindowsRelativePath = RelativePath<WindowsDialect>;

/// Represents the Windows path [`Dialect`].
///
/// Both `/` and `\` separate atoms on input and `/` is used on output. Paths may carry a drive
/// specifier, and a relative path may be anchored to the root of an unknown drive. Atoms reject
/// control characters and `< > : " | ? *`. Content matching ignores case.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct WindowsDialect;

impl private::Sealed for WindowsDialect {}

impl Dialect for WindowsDialect {
    fn label() -> &'static str {
        "windows"
    }

    #[inline]
    fn is_separator(c: char) -> bool {
        parser::is_separator(c)
    }

    fn find_invalid_char(atom: &str) -> Option<char> {
        atom.chars()
            .find(|c| (c.is_ascii_control() && *c != '\x7f') || DISALLOWED_ATOM_CHARS.contains(c))
    }

    fn tokenize(text: &str) -> std::result::Result<Tokens<'_>, &'static str> {
        parser::parse(text)
    }

    #[inline]
    fn supports_drives() -> bool {
        true
    }

    #[inline]
    fn is_case_insensitive() -> bool {
        true
    }
}

impl fmt::Debug for WindowsDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowsDialect").finish()
    }
}

impl fmt::Display for WindowsDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowsDialect")
    }
}

impl WindowsPath {
    /// Creates a path of either variant from a drive and atoms.
    ///
    /// Shorthand for [`Path::from_parts`].
    pub fn from_drive_and_atoms<I, S>(
        atoms: I,
        drive: Option<Drive>,
        absolute: bool,
        anchored: bool,
        trailing_separator: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = if absolute {
            PathKind::Absolute
        } else {
            PathKind::Relative
        };
        Self::from_parts(kind, drive, anchored, atoms, trailing_separator)
    }

    /// Returns a copy of this path with its drive replaced, or removed when `drive` is `None`.
    pub fn join_drive(&self, drive: Option<Drive>) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.join_drive(drive)),
            Self::Relative(path) => Self::Relative(path.join_drive(drive)),
        }
    }

    /// Returns true if this path's drive matches `drive`, ignoring case. A missing drive only
    /// matches `None`.
    pub fn matches_drive(&self, drive: Option<Drive>) -> bool {
        Drive::matches_option(self.drive(), drive)
    }

    /// Like [`matches_drive`](Self::matches_drive), but `None` matches any path.
    pub fn matches_drive_or_none(&self, drive: Option<Drive>) -> bool {
        drive.is_none() || self.matches_drive(drive)
    }
}

impl WindowsAbsolutePath {
    /// Creates an absolute path from atoms and an optional drive.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{Drive, WindowsAbsolutePath};
    ///
    /// let drive = Drive::new('C').ok();
    /// let path = WindowsAbsolutePath::from_drive_and_atoms(["Windows"], drive, false).unwrap();
    /// assert_eq!(path.to_string(), "C:/Windows");
    /// ```
    pub fn from_drive_and_atoms<I, S>(
        atoms: I,
        drive: Option<Drive>,
        trailing_separator: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = WindowsDialect::validate_atoms(atoms)?;
        Ok(Self::new_unchecked(drive, atoms, trailing_separator))
    }

    /// Returns a copy of this path with its drive replaced, or removed when `drive` is `None`.
    pub fn join_drive(&self, drive: Option<Drive>) -> Self {
        Self::new_unchecked(drive, self.atoms.clone(), self.trailing_separator)
    }

    /// Returns true if this path's drive matches `drive`, ignoring case. A missing drive only
    /// matches `None`.
    pub fn matches_drive(&self, drive: Option<Drive>) -> bool {
        Drive::matches_option(self.drive, drive)
    }

    /// Like [`matches_drive`](Self::matches_drive), but `None` matches any path.
    pub fn matches_drive_or_none(&self, drive: Option<Drive>) -> bool {
        drive.is_none() || self.matches_drive(drive)
    }
}

impl WindowsRelativePath {
    /// Creates a relative path from atoms, an optional drive and the anchored flag.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::EmptyPath`](crate::PathError::EmptyPath) if `atoms` is empty and
    /// the path is not anchored.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{Drive, WindowsRelativePath};
    ///
    /// let path = WindowsRelativePath::from_drive_and_atoms(["foo"], None, true, false).unwrap();
    /// assert_eq!(path.to_string(), "/foo");
    ///
    /// let drive = Drive::new('D').ok();
    /// let path = WindowsRelativePath::from_drive_and_atoms(["foo"], drive, false, true).unwrap();
    /// assert_eq!(path.to_string(), "D:foo/");
    /// ```
    pub fn from_drive_and_atoms<I, S>(
        atoms: I,
        drive: Option<Drive>,
        anchored: bool,
        trailing_separator: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = WindowsDialect::validate_atoms(atoms)?;
        Self::from_validated(drive, anchored, atoms, trailing_separator)
    }

    /// Returns a copy of this path with its drive replaced, or removed when `drive` is `None`.
    ///
    /// This is how a drive gets attached to a driveless path before
    /// [`to_absolute`](Self::to_absolute).
    pub fn join_drive(&self, drive: Option<Drive>) -> Self {
        Self::new_unchecked(
            drive,
            self.anchored,
            self.atoms.clone(),
            self.trailing_separator,
        )
    }

    /// Returns true if this path's drive matches `drive`, ignoring case. A missing drive only
    /// matches `None`.
    pub fn matches_drive(&self, drive: Option<Drive>) -> bool {
        Drive::matches_option(self.drive, drive)
    }

    /// Like [`matches_drive`](Self::matches_drive), but `None` matches any path.
    pub fn matches_drive_or_none(&self, drive: Option<Drive>) -> bool {
        drive.is_none() || self.matches_drive(drive)
    }
}
