use crate::{
    common::{ancestry, path::helpers},
    constants::SELF_ATOM,
    Dialect, Drive, Normalizer, Path, PathError, RelativePath, Resolver, Result,
};
use std::{fmt, marker::PhantomData, str::FromStr};

/// A path rooted at the top of a file system (and, on Windows, optionally at a specific drive).
///
/// An absolute path with no atoms is the root. Absolute paths are never anchored.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath<D: Dialect> {
    pub(crate) drive: Option<Drive>,
    pub(crate) atoms: Vec<String>,
    pub(crate) trailing_separator: bool,
    _dialect: PhantomData<D>,
}

impl_atom_path!(AbsolutePath);

impl<D: Dialect> AbsolutePath<D> {
    /// Builds a path from already validated parts
    pub(crate) fn new_unchecked(
        drive: Option<Drive>,
        atoms: Vec<String>,
        trailing_separator: bool,
    ) -> Self {
        Self {
            drive,
            atoms,
            trailing_separator,
            _dialect: PhantomData,
        }
    }

    pub(crate) fn with_atoms(&self, atoms: Vec<String>, trailing_separator: bool) -> Self {
        Self::new_unchecked(self.drive, atoms, trailing_separator)
    }

    /// Creates an absolute path from a sequence of atoms.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{PathError, UnixAbsolutePath};
    ///
    /// let path = UnixAbsolutePath::from_atoms(["usr", "lib"], true).unwrap();
    /// assert_eq!(path.to_string(), "/usr/lib/");
    ///
    /// assert_eq!(
    ///     UnixAbsolutePath::from_atoms(["usr", ""], false),
    ///     Err(PathError::EmptyPathAtom)
    /// );
    /// ```
    pub fn from_atoms<I, S>(atoms: I, trailing_separator: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = D::validate_atoms(atoms)?;
        Ok(Self::new_unchecked(None, atoms, trailing_separator))
    }

    /// Returns the root path of this dialect, `/`
    pub fn root() -> Self {
        Self::new_unchecked(None, Vec::new(), false)
    }

    /// Parses `text`, failing with [`PathError::NonAbsolutePath`] if it is relative
    pub fn parse(text: &str) -> Result<Self> {
        Path::<D>::parse(text)?.into_absolute()
    }

    /// Returns true if this path normalizes to the root.
    pub fn is_root(&self) -> bool {
        self.normalize().atoms.is_empty()
    }

    /// Returns true if `path` is exactly one level below this path once both are normalized.
    ///
    /// Always false when the drives differ, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::UnixAbsolutePath;
    ///
    /// let parent = UnixAbsolutePath::parse("/foo").unwrap();
    /// assert!(parent.is_parent_of(&UnixAbsolutePath::parse("/foo/bar").unwrap()));
    /// assert!(parent.is_parent_of(&UnixAbsolutePath::parse("/foo/./baz/../bar").unwrap()));
    /// assert!(!parent.is_parent_of(&UnixAbsolutePath::parse("/foo/bar/baz").unwrap()));
    /// assert!(!parent.is_parent_of(&parent));
    /// ```
    pub fn is_parent_of(&self, path: &AbsolutePath<D>) -> bool {
        ancestry::is_parent_of(self, path)
    }

    /// Returns true if `path` is strictly below this path once both are normalized.
    ///
    /// A path is never its own ancestor. Always false when the drives differ, ignoring case.
    pub fn is_ancestor_of(&self, path: &AbsolutePath<D>) -> bool {
        ancestry::is_ancestor_of(self, path)
    }

    /// Computes the shortest relative path leading from `parent` to this path.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::DriveMismatch`] if the two paths are on different drives.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::UnixAbsolutePath;
    ///
    /// let child = UnixAbsolutePath::parse("/foo/qux").unwrap();
    /// let parent = UnixAbsolutePath::parse("/foo/bar/baz").unwrap();
    /// let relative = child.relative_to(&parent).unwrap();
    /// assert_eq!(relative.to_string(), "../../qux");
    /// assert_eq!(parent.join(&relative).unwrap().normalize(), child);
    /// ```
    pub fn relative_to(&self, parent: &AbsolutePath<D>) -> Result<RelativePath<D>> {
        ancestry::relative_to(self, parent)
    }

    /// Joins a relative path onto this one; see [`Resolver::resolve_relative`]
    pub fn join(&self, path: &RelativePath<D>) -> Result<Self> {
        Resolver.resolve_relative(self, path)
    }

    /// Resolves `path` against this path; see [`Resolver::resolve`]
    pub fn resolve(&self, path: &Path<D>) -> Result<Self> {
        Resolver.resolve(self, path)
    }

    pub fn normalize(&self) -> Self {
        Normalizer.normalize_absolute(self)
    }

    /// Drops the root, keeping the drive. The root itself becomes the self path `.`.
    pub fn to_relative(&self) -> RelativePath<D> {
        let atoms = if self.atoms.is_empty() {
            vec![SELF_ATOM.to_string()]
        } else {
            self.atoms.clone()
        };
        RelativePath::new_unchecked(self.drive, false, atoms, self.trailing_separator)
    }
}

impl<D: Dialect> Default for AbsolutePath<D> {
    fn default() -> Self {
        Self::root()
    }
}

impl<D: Dialect> FromStr for AbsolutePath<D> {
    type Err = PathError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<D: Dialect> fmt::Display for AbsolutePath<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        helpers::write_path(f, self.drive, true, &self.atoms, self.trailing_separator)
    }
}

impl<D: Dialect> fmt::Debug for AbsolutePath<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}
