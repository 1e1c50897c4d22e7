use crate::Drive;
use thiserror::Error;

/// Result type alias for operations that may fail with a [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors raised when constructing or transforming a path.
///
/// Every variant describes a precondition the caller violated; none of them are recovered from
/// inside this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// An atom was the empty string.
    #[error("path atoms must not be empty")]
    EmptyPathAtom,

    /// An atom contained a separator character.
    #[error("path atom {atom:?} contains a separator")]
    PathAtomContainsSeparator {
        /// The offending atom.
        atom: String,
    },

    /// An atom contained a control or reserved character (Windows only).
    #[error("path atom {atom:?} contains invalid character {character:?}")]
    InvalidPathAtomCharacter {
        /// The offending atom.
        atom: String,
        /// The first disallowed character found in the atom.
        character: char,
    },

    /// A non-anchored relative path was built from zero atoms.
    #[error("relative paths must contain at least one atom")]
    EmptyPath,

    /// The requested combination of path properties cannot exist.
    #[error("invalid path state: {reason}")]
    InvalidPathState {
        /// What made the state invalid.
        reason: &'static str,
    },

    /// Two paths carry drive specifiers that do not match.
    #[error("drive specifiers {} and {} do not match", fmt_drive(.left), fmt_drive(.right))]
    DriveMismatch {
        left: Option<Drive>,
        right: Option<Drive>,
    },

    /// An atom index was out of range.
    #[error("no atom at index {index}")]
    UndefinedAtom { index: usize },

    /// An absolute path was required.
    #[error("{path:?} is not an absolute path")]
    NonAbsolutePath { path: String },

    /// A relative path was required.
    #[error("{path:?} is not a relative path")]
    NonRelativePath { path: String },

    /// A drive specifier was not a single ASCII letter.
    #[error("{value:?} is not a valid drive specifier")]
    InvalidDrive { value: String },
}

fn fmt_drive(drive: &Option<Drive>) -> String {
    match drive {
        Some(drive) => format!("{drive:?}"),
        None => String::from("<none>"),
    }
}
