use crate::{
    constants::{PARENT_ATOM, SELF_ATOM},
    AbsolutePath, Dialect, Path, RelativePath,
};

/// Collapses `.` and `..` atoms into canonical form.
///
/// Normalization never changes a path's variant, drive or trailing-separator flag. Rooted
/// sequences (absolute paths and anchored relative paths) clamp any `..` that would climb above
/// the root, while plain relative paths keep leading `..` atoms verbatim.
///
/// The normalizer holds no state; use the [`Normalizer`] value directly or through the
/// `normalize` methods on each path type.
///
/// # Examples
///
/// ```
/// use atom_path::{Normalizer, UnixPath};
///
/// let path: UnixPath = "/foo/bar/baz/../../qux".parse().unwrap();
/// assert_eq!(Normalizer.normalize(&path).to_string(), "/foo/qux");
///
/// let path: UnixPath = "../foo/../../bar".parse().unwrap();
/// assert_eq!(Normalizer.normalize(&path).to_string(), "../../bar");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalizer;

impl Normalizer {
    /// Normalizes either path variant
    pub fn normalize<D: Dialect>(&self, path: &Path<D>) -> Path<D> {
        match path {
            Path::Absolute(path) => Path::Absolute(self.normalize_absolute(path)),
            Path::Relative(path) => Path::Relative(self.normalize_relative(path)),
        }
    }

    pub fn normalize_absolute<D: Dialect>(&self, path: &AbsolutePath<D>) -> AbsolutePath<D> {
        let atoms = self.normalize_atoms(path.atoms(), true);
        AbsolutePath::new_unchecked(path.drive(), atoms, path.has_trailing_separator())
    }

    pub fn normalize_relative<D: Dialect>(&self, path: &RelativePath<D>) -> RelativePath<D> {
        let atoms = self.normalize_atoms(path.atoms(), path.is_anchored());
        RelativePath::new_unchecked(
            path.drive(),
            path.is_anchored(),
            atoms,
            path.has_trailing_separator(),
        )
    }

    /// Normalizes a bare atom sequence in a single left-to-right pass.
    ///
    /// * `.` is dropped.
    /// * `..` cancels the preceding real atom. With nothing to cancel it is dropped when `rooted`
    ///   and kept otherwise.
    /// * Anything else is kept.
    ///
    /// A plain relative sequence that collapses to nothing becomes the lone self atom `.`, so the
    /// result is never empty unless `rooted` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::Normalizer;
    ///
    /// assert_eq!(Normalizer.normalize_atoms(&["a", "..", ".."], true), Vec::<String>::new());
    /// assert_eq!(Normalizer.normalize_atoms(&["a", "..", ".."], false), vec![".."]);
    /// assert_eq!(Normalizer.normalize_atoms(&["a", ".."], false), vec!["."]);
    /// ```
    pub fn normalize_atoms<S: AsRef<str>>(&self, atoms: &[S], rooted: bool) -> Vec<String> {
        let mut normalized: Vec<String> = Vec::with_capacity(atoms.len());

        for atom in atoms.iter().map(AsRef::as_ref) {
            match atom {
                SELF_ATOM => (),
                PARENT_ATOM => match normalized.last() {
                    Some(top) if top != PARENT_ATOM => {
                        normalized.pop();
                    }
                    _ if rooted => (),
                    _ => normalized.push(PARENT_ATOM.to_string()),
                },
                atom => normalized.push(atom.to_string()),
            }
        }

        if normalized.is_empty() && !rooted {
            normalized.push(SELF_ATOM.to_string());
        }

        log::trace!(
            "normalized {} atom(s) into {:?} (rooted = {rooted})",
            atoms.len(),
            normalized
        );

        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnixPath, WindowsPath};

    fn unix(s: &str) -> String {
        let path: UnixPath = s.parse().unwrap();
        Normalizer.normalize(&path).to_string()
    }

    fn windows(s: &str) -> String {
        let path: WindowsPath = s.parse().unwrap();
        Normalizer.normalize(&path).to_string()
    }

    #[test]
    fn should_cancel_parent_atoms_against_preceding_real_atoms() {
        assert_eq!(unix("/foo/bar/baz/../../qux"), "/foo/qux");
        assert_eq!(unix("foo/bar/../baz"), "foo/baz");
        assert_eq!(unix("/foo/./bar/."), "/foo/bar");
    }

    #[test]
    fn should_clamp_leading_parent_atoms_on_rooted_paths() {
        assert_eq!(unix("/.."), "/");
        assert_eq!(unix("/../../foo/.."), "/");
        assert_eq!(unix("/../foo/../../bar"), "/bar");
        assert_eq!(windows("C:/../../foo"), "C:/foo");
        assert_eq!(windows("/../foo"), "/foo");
    }

    #[test]
    fn should_preserve_leading_parent_atoms_on_plain_relative_paths() {
        assert_eq!(unix("../foo/../../bar"), "../../bar");
        assert_eq!(unix("../../../.."), "../../../..");
        assert_eq!(unix("foo/../../.."), "../..");
        assert_eq!(unix("./../."), "..");
        assert_eq!(windows("C:../foo/../.."), "C:../..");
    }

    #[test]
    fn should_keep_a_lone_self_atom_when_plain_relative_path_collapses() {
        assert_eq!(unix("."), ".");
        assert_eq!(unix("./."), ".");
        assert_eq!(unix("foo/.."), ".");
        assert_eq!(unix("foo/bar/../.."), ".");
        assert_eq!(unix("./foo"), "foo");
    }

    #[test]
    fn should_allow_anchored_paths_to_collapse_to_the_root() {
        let path: WindowsPath = r"\foo\..".parse().unwrap();
        let normalized = Normalizer.normalize(&path);
        assert!(normalized.atoms().is_empty());
        assert_eq!(normalized.to_string(), "/");
        assert!(normalized.as_relative().unwrap().is_anchored());
    }

    #[test]
    fn should_preserve_variant_drive_and_trailing_separator() {
        assert_eq!(unix("/foo/../bar/"), "/bar/");
        assert_eq!(unix("foo/./bar/"), "foo/bar/");
        assert_eq!(windows("c:/foo/../bar/"), "c:/bar/");
        assert_eq!(windows(r"D:foo\.\bar"), "D:foo/bar");
    }

    #[test]
    fn should_be_idempotent() {
        for s in ["/a/../b/./c/..", "../a/../../b", "a/b/../..", ".", "/"] {
            let once = unix(s);
            assert_eq!(unix(&once), once, "not idempotent for {s:?}");
        }
    }
}
