use crate::{common::parser::Tokens, private, PathError, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// Interface describing the syntax rules of a path dialect.
///
/// Implemented by [`UnixDialect`](crate::UnixDialect) and
/// [`WindowsDialect`](crate::WindowsDialect). The trait is sealed; every path type in this crate is
/// generic over it, so the normalization, resolution and diffing algorithms are written once and
/// the dialect only decides how atoms are validated, how strings are tokenized and whether drive
/// specifiers exist at all.
pub trait Dialect:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + private::Sealed + 'static
{
    /// Human-readable name of the dialect
    fn label() -> &'static str;

    /// Returns true if `c` separates atoms in this dialect's string syntax
    fn is_separator(c: char) -> bool;

    /// Returns the first character within an atom that this dialect forbids, if any.
    ///
    /// Separators are reported separately by [`Dialect::validate_atom`] and are not included.
    fn find_invalid_char(atom: &str) -> Option<char>;

    /// Splits `text` into its drive, root marker, atoms and trailing separator
    fn tokenize(text: &str) -> std::result::Result<Tokens<'_>, &'static str>;

    /// Returns true if paths in this dialect may carry a drive specifier or be anchored
    fn supports_drives() -> bool;

    /// Returns true if content matching (`starts_with`, `contains`, ...) ignores case
    fn is_case_insensitive() -> bool;

    /// Validates a single atom.
    ///
    /// Fails with [`PathError::EmptyPathAtom`], [`PathError::PathAtomContainsSeparator`] or
    /// [`PathError::InvalidPathAtomCharacter`].
    fn validate_atom(atom: &str) -> Result<()> {
        if atom.is_empty() {
            return Err(PathError::EmptyPathAtom);
        }

        if atom.contains(Self::is_separator) {
            return Err(PathError::PathAtomContainsSeparator {
                atom: atom.to_string(),
            });
        }

        match Self::find_invalid_char(atom) {
            Some(character) => Err(PathError::InvalidPathAtomCharacter {
                atom: atom.to_string(),
                character,
            }),
            None => Ok(()),
        }
    }

    /// Validates and takes ownership of a sequence of atoms
    fn validate_atoms<I, S>(atoms: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        atoms
            .into_iter()
            .map(|atom| {
                let atom = atom.into();
                Self::validate_atom(&atom).map(|_| atom)
            })
            .collect()
    }
}
