use crate::{AbsolutePath, Dialect, Drive, Path, RelativePath, Result};

/// Combines a base [`AbsolutePath`] with another path into a new absolute path.
///
/// Resolution never normalizes; call `normalize` on the result when canonical form is needed.
/// Like [`Normalizer`](crate::Normalizer) the resolver is stateless.
///
/// # Examples
///
/// ```
/// use atom_path::{PathError, Resolver, WindowsAbsolutePath, WindowsPath};
///
/// let base = WindowsAbsolutePath::parse("C:/foo/bar").unwrap();
///
/// let path = WindowsPath::parse("baz").unwrap();
/// assert_eq!(Resolver.resolve(&base, &path).unwrap().to_string(), "C:/foo/bar/baz");
///
/// // Anchored paths keep only the drive of the base
/// let path = WindowsPath::parse(r"\baz\qux").unwrap();
/// assert_eq!(Resolver.resolve(&base, &path).unwrap().to_string(), "C:/baz/qux");
///
/// let path = WindowsPath::parse("D:baz").unwrap();
/// assert!(matches!(
///     Resolver.resolve(&base, &path),
///     Err(PathError::DriveMismatch { .. })
/// ));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolver;

impl Resolver {
    /// Resolves `path` against `base`.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::DriveMismatch`](crate::PathError::DriveMismatch) if `path` is
    /// relative and names a drive other than `base`'s.
    pub fn resolve<D: Dialect>(
        &self,
        base: &AbsolutePath<D>,
        path: &Path<D>,
    ) -> Result<AbsolutePath<D>> {
        let resolved = match path {
            Path::Absolute(path) => self.resolve_absolute(base, path),
            Path::Relative(path) => self.resolve_relative(base, path)?,
        };

        log::trace!("resolved {path} against {base} into {resolved}");
        Ok(resolved)
    }

    /// Resolves an absolute path against `base`.
    ///
    /// An explicit drive on `path` always wins. A driveless `path` takes `base`'s drive, which is
    /// a no-op outside of Windows.
    pub fn resolve_absolute<D: Dialect>(
        &self,
        base: &AbsolutePath<D>,
        path: &AbsolutePath<D>,
    ) -> AbsolutePath<D> {
        match path.drive() {
            Some(_) => path.clone(),
            None => AbsolutePath::new_unchecked(
                base.drive(),
                path.atoms().to_vec(),
                path.has_trailing_separator(),
            ),
        }
    }

    /// Resolves a relative path against `base`.
    ///
    /// An anchored `path` discards `base`'s atoms and keeps only its drive. Otherwise the atoms
    /// of `path` are appended to those of `base`. The trailing separator always comes from
    /// `path` and the drive always comes from `base`.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::DriveMismatch`](crate::PathError::DriveMismatch), before any atoms
    /// are combined, if `path` names a drive that does not match `base`'s.
    pub fn resolve_relative<D: Dialect>(
        &self,
        base: &AbsolutePath<D>,
        path: &RelativePath<D>,
    ) -> Result<AbsolutePath<D>> {
        Drive::check_compatible(base.drive(), path.drive())?;

        let atoms = if path.is_anchored() {
            path.atoms().to_vec()
        } else {
            let mut atoms = Vec::with_capacity(base.atoms().len() + path.atoms().len());
            atoms.extend_from_slice(base.atoms());
            atoms.extend_from_slice(path.atoms());
            atoms
        };

        Ok(AbsolutePath::new_unchecked(
            base.drive(),
            atoms,
            path.has_trailing_separator(),
        ))
    }
}
