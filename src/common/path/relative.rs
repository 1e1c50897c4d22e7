use crate::{
    common::path::helpers,
    constants::SELF_ATOM,
    AbsolutePath, Dialect, Drive, Normalizer, Path, PathError, Resolver, Result,
};
use std::{fmt, marker::PhantomData, str::FromStr};

/// A path that only has meaning once resolved against an [`AbsolutePath`].
///
/// A plain relative path always has at least one atom; the empty path is spelled `.`. On Windows
/// a relative path may additionally carry a drive (`C:foo`) or be anchored to the root of a drive
/// that is not yet known (`\foo`), and only an anchored path may have no atoms at all.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RelativePath<D: Dialect> {
    pub(crate) drive: Option<Drive>,
    pub(crate) anchored: bool,
    pub(crate) atoms: Vec<String>,
    pub(crate) trailing_separator: bool,
    _dialect: PhantomData<D>,
}

impl_atom_path!(RelativePath);

impl<D: Dialect> RelativePath<D> {
    pub(crate) fn new_unchecked(
        drive: Option<Drive>,
        anchored: bool,
        atoms: Vec<String>,
        trailing_separator: bool,
    ) -> Self {
        Self {
            drive,
            anchored,
            atoms,
            trailing_separator,
            _dialect: PhantomData,
        }
    }

    /// Builds a path from atoms that were already validated, enforcing that a non-anchored path
    /// is never empty
    pub(crate) fn from_validated(
        drive: Option<Drive>,
        anchored: bool,
        atoms: Vec<String>,
        trailing_separator: bool,
    ) -> Result<Self> {
        if atoms.is_empty() && !anchored {
            return Err(PathError::EmptyPath);
        }

        Ok(Self::new_unchecked(
            drive,
            anchored,
            atoms,
            trailing_separator,
        ))
    }

    pub(crate) fn with_atoms(&self, atoms: Vec<String>, trailing_separator: bool) -> Self {
        Self::new_unchecked(self.drive, self.anchored, atoms, trailing_separator)
    }

    /// Creates a relative path from a sequence of atoms.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::EmptyPath`] if `atoms` is empty, or with an atom validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{PathError, UnixRelativePath};
    ///
    /// let path = UnixRelativePath::from_atoms(["..", "lib"], false).unwrap();
    /// assert_eq!(path.to_string(), "../lib");
    ///
    /// let atoms: [&str; 0] = [];
    /// assert_eq!(UnixRelativePath::from_atoms(atoms, false), Err(PathError::EmptyPath));
    /// ```
    pub fn from_atoms<I, S>(atoms: I, trailing_separator: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = D::validate_atoms(atoms)?;
        Self::from_validated(None, false, atoms, trailing_separator)
    }

    /// Returns the canonical self path, `.`
    pub fn self_path() -> Self {
        Self::new_unchecked(None, false, vec![SELF_ATOM.to_string()], false)
    }

    /// Parses `text`, failing with [`PathError::NonRelativePath`] if it is absolute
    pub fn parse(text: &str) -> Result<Self> {
        Path::<D>::parse(text)?.into_relative()
    }

    /// Returns true if the path is rooted at a drive that is not yet known, e.g. `\foo`
    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Returns true if this path normalizes to `.`
    pub fn is_self(&self) -> bool {
        !self.anchored && self.normalize().atoms == [SELF_ATOM]
    }

    /// Joins another relative path onto this one.
    ///
    /// If `path` is anchored it replaces this path's atoms entirely while this path's drive is
    /// kept. Otherwise the atoms are concatenated and `path`'s trailing separator wins.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::DriveMismatch`] if `path` carries a drive that this path does not.
    pub fn join(&self, path: &RelativePath<D>) -> Result<Self> {
        Drive::check_compatible(self.drive, path.drive)?;

        if path.anchored {
            return Ok(Self::new_unchecked(
                self.drive,
                true,
                path.atoms.clone(),
                path.trailing_separator,
            ));
        }

        let mut atoms = self.atoms.clone();
        atoms.extend(path.atoms.iter().cloned());
        Ok(self.with_atoms(atoms, path.trailing_separator))
    }

    pub fn normalize(&self) -> Self {
        Normalizer.normalize_relative(self)
    }

    /// Roots this path.
    ///
    /// # Errors
    ///
    /// In a dialect with drives, fails with [`PathError::InvalidPathState`] unless a drive is
    /// attached; use `join_drive` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::{Drive, PathError, UnixRelativePath, WindowsRelativePath};
    ///
    /// let path = UnixRelativePath::parse("foo/bar").unwrap();
    /// assert_eq!(path.to_absolute().unwrap().to_string(), "/foo/bar");
    ///
    /// let path = WindowsRelativePath::parse(r"\foo\bar").unwrap();
    /// assert!(matches!(path.to_absolute(), Err(PathError::InvalidPathState { .. })));
    ///
    /// let path = path.join_drive(Drive::new('C').ok());
    /// assert_eq!(path.to_absolute().unwrap().to_string(), "C:/foo/bar");
    /// ```
    pub fn to_absolute(&self) -> Result<AbsolutePath<D>> {
        if D::supports_drives() && self.drive.is_none() {
            log::debug!("cannot root {self} without a drive specifier");
            return Err(PathError::InvalidPathState {
                reason: "a drive specifier is required to convert this path to an absolute path",
            });
        }

        Ok(AbsolutePath::new_unchecked(
            self.drive,
            self.atoms.clone(),
            self.trailing_separator,
        ))
    }

    /// Resolves this path against `base`; see [`Resolver::resolve_relative`]
    pub fn resolve_against(&self, base: &AbsolutePath<D>) -> Result<AbsolutePath<D>> {
        Resolver.resolve_relative(base, self)
    }
}

impl<D: Dialect> Default for RelativePath<D> {
    fn default() -> Self {
        Self::self_path()
    }
}

impl<D: Dialect> FromStr for RelativePath<D> {
    type Err = PathError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<D: Dialect> fmt::Display for RelativePath<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        helpers::write_path(
            f,
            self.drive,
            self.anchored,
            &self.atoms,
            self.trailing_separator,
        )
    }
}

impl<D: Dialect> fmt::Debug for RelativePath<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}
