#[macro_use]
mod macros;

mod absolute;
mod relative;

pub use absolute::*;
pub use relative::*;

use crate::{
    common::parser::Tokens, constants::SELF_ATOM, Dialect, Drive, Normalizer, PathError, Result,
};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Which of the two path variants to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathKind {
    Absolute,
    Relative,
}

/// A path in dialect `D`: either an [`AbsolutePath`] or a [`RelativePath`].
///
/// Paths are immutable. Every transformation returns a new value and equality is structural over
/// the variant, atoms, trailing separator, drive and anchoring.
///
/// # Examples
///
/// ```
/// use atom_path::{UnixPath, WindowsPath};
///
/// let path: UnixPath = "/foo//bar/".parse().unwrap();
/// assert!(path.is_absolute());
/// assert_eq!(path.atoms(), ["foo", "bar"]);
/// assert!(path.has_trailing_separator());
/// assert_eq!(path.to_string(), "/foo/bar/");
///
/// // A leading separator without a drive is anchored rather than absolute on Windows
/// let path: WindowsPath = r"\foo\bar".parse().unwrap();
/// assert!(path.is_relative());
/// assert_eq!(path.to_string(), "/foo/bar");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Path<D: Dialect> {
    Absolute(AbsolutePath<D>),
    Relative(RelativePath<D>),
}

impl<D: Dialect> Path<D> {
    /// Parses `text` using the dialect's string syntax.
    ///
    /// The empty string and `.` both parse to the relative self path.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = D::tokenize(text).map_err(|reason| {
            log::debug!("failed to tokenize {text:?} as {}: {reason}", D::label());
            PathError::InvalidPathState { reason }
        })?;
        Self::from_tokens(tokens)
    }

    pub(crate) fn from_tokens(tokens: Tokens<'_>) -> Result<Self> {
        let drive = tokens.drive.map(Drive::new).transpose()?;
        let mut atoms = D::validate_atoms(tokens.atoms)?;

        if tokens.rooted && (drive.is_some() || !D::supports_drives()) {
            return Ok(Self::Absolute(AbsolutePath::new_unchecked(
                drive,
                atoms,
                tokens.trailing_separator,
            )));
        }

        let anchored = tokens.rooted;
        if atoms.is_empty() && !anchored {
            atoms.push(SELF_ATOM.to_string());
        }

        Ok(Self::Relative(RelativePath::new_unchecked(
            drive,
            anchored,
            atoms,
            tokens.trailing_separator,
        )))
    }

    /// Builds a path of either variant from its parts, validating every atom.
    ///
    /// # Errors
    ///
    /// * [`PathError::InvalidPathState`] if the dialect has no drives but `drive` or `anchored`
    ///   was supplied, or if an absolute path is requested with `anchored` set.
    /// * [`PathError::EmptyPath`] for a non-anchored relative path with no atoms.
    /// * Any atom validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{Drive, PathError, PathKind, WindowsPath};
    ///
    /// let drive = Drive::new('C').ok();
    /// let path = WindowsPath::from_parts(PathKind::Absolute, drive, false, ["foo"], false)
    ///     .unwrap();
    /// assert_eq!(path.to_string(), "C:/foo");
    ///
    /// assert!(matches!(
    ///     WindowsPath::from_parts(PathKind::Absolute, drive, true, ["foo"], false),
    ///     Err(PathError::InvalidPathState { .. })
    /// ));
    /// ```
    pub fn from_parts<I, S>(
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
        if !D::supports_drives() && (drive.is_some() || anchored) {
            return Err(PathError::InvalidPathState {
                reason: "drive specifiers and anchoring are not supported by this dialect",
            });
        }

        let atoms = D::validate_atoms(atoms)?;
        match kind {
            PathKind::Absolute if anchored => Err(PathError::InvalidPathState {
                reason: "absolute paths cannot be anchored",
            }),
            PathKind::Absolute => Ok(Self::Absolute(AbsolutePath::new_unchecked(
                drive,
                atoms,
                trailing_separator,
            ))),
            PathKind::Relative => {
                RelativePath::from_validated(drive, anchored, atoms, trailing_separator)
                    .map(Self::Relative)
            }
        }
    }

    #[inline]
    pub fn kind(&self) -> PathKind {
        match self {
            Self::Absolute(_) => PathKind::Absolute,
            Self::Relative(_) => PathKind::Relative,
        }
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    pub fn as_absolute(&self) -> Option<&AbsolutePath<D>> {
        match self {
            Self::Absolute(path) => Some(path),
            Self::Relative(_) => None,
        }
    }

    pub fn as_relative(&self) -> Option<&RelativePath<D>> {
        match self {
            Self::Absolute(_) => None,
            Self::Relative(path) => Some(path),
        }
    }

    /// Asserts this path is absolute, failing with [`PathError::NonAbsolutePath`] otherwise
    pub fn into_absolute(self) -> Result<AbsolutePath<D>> {
        match self {
            Self::Absolute(path) => Ok(path),
            Self::Relative(path) => Err(PathError::NonAbsolutePath {
                path: path.to_string(),
            }),
        }
    }

    /// Asserts this path is relative, failing with [`PathError::NonRelativePath`] otherwise
    pub fn into_relative(self) -> Result<RelativePath<D>> {
        match self {
            Self::Absolute(path) => Err(PathError::NonRelativePath {
                path: path.to_string(),
            }),
            Self::Relative(path) => Ok(path),
        }
    }

    pub fn atoms(&self) -> &[String] {
        match self {
            Self::Absolute(path) => path.atoms(),
            Self::Relative(path) => path.atoms(),
        }
    }

    #[inline]
    pub fn has_atoms(&self) -> bool {
        !self.atoms().is_empty()
    }

    pub fn has_trailing_separator(&self) -> bool {
        match self {
            Self::Absolute(path) => path.has_trailing_separator(),
            Self::Relative(path) => path.has_trailing_separator(),
        }
    }

    /// Drive specifier of the path, always `None` outside of Windows
    pub fn drive(&self) -> Option<Drive> {
        match self {
            Self::Absolute(path) => path.drive(),
            Self::Relative(path) => path.drive(),
        }
    }

    /// Returns the last atom, if any
    pub fn name(&self) -> Option<&str> {
        self.atoms().last().map(String::as_str)
    }

    pub fn extension(&self) -> Option<&str> {
        self.name()
            .map(helpers::rsplit_file_at_dot)
            .and_then(|(before, after)| before.and(after))
    }

    /// Returns a normalized copy of this path; see [`Normalizer`]
    pub fn normalize(&self) -> Self {
        Normalizer.normalize(self)
    }

    pub fn join(&self, path: &RelativePath<D>) -> Result<Self> {
        match self {
            Self::Absolute(base) => base.join(path).map(Self::Absolute),
            Self::Relative(base) => base.join(path).map(Self::Relative),
        }
    }

    pub fn join_atoms<I, S>(&self, atoms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            Self::Absolute(path) => path.join_atoms(atoms).map(Self::Absolute),
            Self::Relative(path) => path.join_atoms(atoms).map(Self::Relative),
        }
    }

    pub fn parent(&self, levels: usize) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.parent(levels)),
            Self::Relative(path) => Self::Relative(path.parent(levels)),
        }
    }

    /// Returns the atom at `index`, failing with [`PathError::UndefinedAtom`] if out of range
    pub fn atom_at(&self, index: usize) -> Result<&str> {
        self.atoms()
            .get(index)
            .map(String::as_str)
            .ok_or(PathError::UndefinedAtom { index })
    }

    #[inline]
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    pub fn join_trailing_separator(&self) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.join_trailing_separator()),
            Self::Relative(path) => Self::Relative(path.join_trailing_separator()),
        }
    }

    pub fn strip_trailing_separator(&self) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.strip_trailing_separator()),
            Self::Relative(path) => Self::Relative(path.strip_trailing_separator()),
        }
    }

    pub fn replace_name(&self, name: &str) -> Result<Self> {
        match self {
            Self::Absolute(path) => path.replace_name(name).map(Self::Absolute),
            Self::Relative(path) => path.replace_name(name).map(Self::Relative),
        }
    }

    pub fn join_extension(&self, extension: &str) -> Result<Self> {
        match self {
            Self::Absolute(path) => path.join_extension(extension).map(Self::Absolute),
            Self::Relative(path) => path.join_extension(extension).map(Self::Relative),
        }
    }

    pub fn strip_extension(&self) -> Self {
        match self {
            Self::Absolute(path) => Self::Absolute(path.strip_extension()),
            Self::Relative(path) => Self::Relative(path.strip_extension()),
        }
    }

    pub fn replace_extension(&self, extension: &str) -> Result<Self> {
        match self {
            Self::Absolute(path) => path.replace_extension(extension).map(Self::Absolute),
            Self::Relative(path) => path.replace_extension(extension).map(Self::Relative),
        }
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        helpers::matches_with::<D>(&self.to_string(), needle, |h, n| h.starts_with(n))
    }

    pub fn ends_with(&self, needle: &str) -> bool {
        helpers::matches_with::<D>(&self.to_string(), needle, |h, n| h.ends_with(n))
    }

    pub fn contains(&self, needle: &str) -> bool {
        helpers::matches_with::<D>(&self.to_string(), needle, |h, n| h.contains(n))
    }
}

impl<D: Dialect> From<AbsolutePath<D>> for Path<D> {
    #[inline]
    fn from(path: AbsolutePath<D>) -> Self {
        Self::Absolute(path)
    }
}

impl<D: Dialect> From<RelativePath<D>> for Path<D> {
    #[inline]
    fn from(path: RelativePath<D>) -> Self {
        Self::Relative(path)
    }
}

impl<D: Dialect> TryFrom<Path<D>> for AbsolutePath<D> {
    type Error = PathError;

    fn try_from(path: Path<D>) -> Result<Self> {
        path.into_absolute()
    }
}

impl<D: Dialect> TryFrom<Path<D>> for RelativePath<D> {
    type Error = PathError;

    fn try_from(path: Path<D>) -> Result<Self> {
        path.into_relative()
    }
}

impl<D: Dialect> FromStr for Path<D> {
    type Err = PathError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<D: Dialect> fmt::Display for Path<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(path) => fmt::Display::fmt(path, f),
            Self::Relative(path) => fmt::Display::fmt(path, f),
        }
    }
}

impl<D: Dialect> fmt::Debug for Path<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(path) => f.debug_tuple("Absolute").field(path).finish(),
            Self::Relative(path) => f.debug_tuple("Relative").field(path).finish(),
        }
    }
}

pub(crate) mod helpers {
    use crate::{constants::ATOM_SEPARATOR, Dialect, Drive};
    use std::fmt;

    /// Splits a file name at its last dot into `(stem, extension)`. A single leading dot belongs
    /// to the stem, so `.bashrc` has no extension.
    pub fn rsplit_file_at_dot(file: &str) -> (Option<&str>, Option<&str>) {
        if file == ".." {
            return (Some(file), None);
        }

        let mut iter = file.rsplitn(2, '.');
        let after = iter.next();
        let before = iter.next();
        if before == Some("") {
            (Some(file), None)
        } else {
            (before, after)
        }
    }

    /// Applies `f` to `haystack` and `needle`, lowercasing both first when the dialect matches
    /// case-insensitively
    pub fn matches_with<D: Dialect>(
        haystack: &str,
        needle: &str,
        f: impl Fn(&str, &str) -> bool,
    ) -> bool {
        if D::is_case_insensitive() {
            f(&haystack.to_lowercase(), &needle.to_lowercase())
        } else {
            f(haystack, needle)
        }
    }

    /// Writes the canonical string form shared by every variant and dialect
    pub fn write_path(
        f: &mut fmt::Formatter<'_>,
        drive: Option<Drive>,
        rooted: bool,
        atoms: &[String],
        trailing_separator: bool,
    ) -> fmt::Result {
        if let Some(drive) = drive {
            write!(f, "{drive}:")?;
        }

        if rooted {
            write!(f, "{ATOM_SEPARATOR}")?;
        }

        for (i, atom) in atoms.iter().enumerate() {
            if i > 0 {
                write!(f, "{ATOM_SEPARATOR}")?;
            }
            f.write_str(atom)?;
        }

        // A bare root is printed once, whatever its trailing flag says
        if trailing_separator && !atoms.is_empty() {
            write!(f, "{ATOM_SEPARATOR}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnixDialect, UnixPath, WindowsDialect, WindowsPath};

    #[test]
    fn rsplit_file_at_dot_should_treat_leading_dot_as_part_of_stem() {
        assert_eq!(helpers::rsplit_file_at_dot("file.txt"), (Some("file"), Some("txt")));
        assert_eq!(
            helpers::rsplit_file_at_dot("archive.tar.gz"),
            (Some("archive.tar"), Some("gz"))
        );
        assert_eq!(helpers::rsplit_file_at_dot(".bashrc"), (Some(".bashrc"), None));
        assert_eq!(helpers::rsplit_file_at_dot("file"), (None, Some("file")));
        assert_eq!(helpers::rsplit_file_at_dot(".."), (Some(".."), None));
    }

    #[test]
    fn from_parts_should_reject_drives_and_anchoring_on_unix() {
        let drive = Drive::new('C').ok();
        assert!(matches!(
            UnixPath::from_parts(PathKind::Absolute, drive, false, ["foo"], false),
            Err(PathError::InvalidPathState { .. })
        ));
        assert!(matches!(
            UnixPath::from_parts(PathKind::Relative, None, true, ["foo"], false),
            Err(PathError::InvalidPathState { .. })
        ));
    }

    #[test]
    fn from_parts_should_reject_anchored_absolute_windows_paths() {
        assert_eq!(
            WindowsPath::from_parts(PathKind::Absolute, None, true, ["foo"], false),
            Err(PathError::InvalidPathState {
                reason: "absolute paths cannot be anchored"
            })
        );
    }

    #[test]
    fn from_parts_should_reject_empty_non_anchored_relative_paths() {
        let atoms: [&str; 0] = [];
        assert_eq!(
            WindowsPath::from_parts(PathKind::Relative, None, false, atoms, false),
            Err(PathError::EmptyPath)
        );
        assert!(WindowsPath::from_parts(PathKind::Relative, None, true, atoms, false).is_ok());
        assert_eq!(
            UnixPath::from_parts(PathKind::Relative, None, false, atoms, false),
            Err(PathError::EmptyPath)
        );
    }

    #[test]
    fn into_absolute_and_into_relative_should_assert_the_variant() {
        let path: UnixPath = "foo/bar".parse().unwrap();
        assert_eq!(
            path.clone().into_absolute(),
            Err(PathError::NonAbsolutePath {
                path: String::from("foo/bar")
            })
        );
        assert!(path.into_relative().is_ok());

        let path: UnixPath = "/foo".parse().unwrap();
        assert_eq!(
            path.into_relative(),
            Err(PathError::NonRelativePath {
                path: String::from("/foo")
            })
        );
    }

    #[test]
    fn equality_should_be_structural() {
        let a: Path<UnixDialect> = "/foo/bar".parse().unwrap();
        let atoms = ["foo", "bar"];
        let b = Path::<UnixDialect>::from_parts(PathKind::Absolute, None, false, atoms, false)
            .unwrap();
        assert_eq!(a, b);

        // Trailing separator participates in equality
        let c: Path<UnixDialect> = "/foo/bar/".parse().unwrap();
        assert_ne!(a, c);

        // Drive letters are compared verbatim for equality
        let upper: Path<WindowsDialect> = "C:/foo".parse().unwrap();
        let lower: Path<WindowsDialect> = "c:/foo".parse().unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn content_matching_should_ignore_case_only_on_windows() {
        let path: UnixPath = "/Foo/Bar.TXT".parse().unwrap();
        assert!(path.starts_with("/Foo"));
        assert!(!path.starts_with("/foo"));
        assert!(path.ends_with(".TXT"));
        assert!(!path.contains("bar"));

        let path: WindowsPath = r"C:\Foo\Bar.TXT".parse().unwrap();
        assert!(path.starts_with("c:/foo"));
        assert!(path.ends_with(".txt"));
        assert!(path.contains("BAR"));
    }

    #[test]
    fn extension_should_come_from_the_last_atom() {
        let path: UnixPath = "/foo.d/bar.tar.gz".parse().unwrap();
        assert_eq!(path.name(), Some("bar.tar.gz"));
        assert_eq!(path.extension(), Some("gz"));

        let path: UnixPath = "/".parse().unwrap();
        assert_eq!(path.name(), None);
        assert_eq!(path.extension(), None);
    }
}
