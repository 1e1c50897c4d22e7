/// Atom referring to the current location
pub const SELF_ATOM: &str = ".";

/// Atom referring to the parent of the current location
pub const PARENT_ATOM: &str = "..";

/// Separator written between atoms when printing a path, in every dialect
pub const ATOM_SEPARATOR: char = '/';

/// Contains constants associated with Unix paths.
pub mod unix {
    pub use crate::unix::constants::*;
}

/// Contains constants associated with Windows paths.
pub mod windows {
    pub use crate::windows::constants::*;
}
