use crate::{PathError, Result};
use std::{convert::TryFrom, fmt, str::FromStr};

/// A single-letter Windows volume designator such as the `C` in `C:/Windows`.
///
/// The letter is stored and printed verbatim. Equality through [`PartialEq`] is exact, which keeps
/// path equality structural; every path algorithm compares drives through [`Drive::matches`]
/// instead, which ignores ASCII case.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Drive(char);

impl Drive {
    /// Creates a drive from an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::Drive;
    ///
    /// assert_eq!(Drive::new('c').unwrap().letter(), 'c');
    /// assert!(Drive::new('1').is_err());
    /// ```
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter))
        } else {
            Err(PathError::InvalidDrive {
                value: letter.to_string(),
            })
        }
    }

    /// Returns the letter exactly as it was supplied.
    #[inline]
    pub fn letter(self) -> char {
        self.0
    }

    /// Returns true if both drives name the same volume, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use atom_path::Drive;
    ///
    /// let upper = Drive::new('C').unwrap();
    /// let lower = Drive::new('c').unwrap();
    /// assert!(upper.matches(lower));
    /// assert_ne!(upper, lower);
    /// ```
    #[inline]
    pub fn matches(self, other: Drive) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Compares optional drives: two missing drives match, and a present drive never matches a
    /// missing one.
    pub(crate) fn matches_option(left: Option<Drive>, right: Option<Drive>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left.matches(right),
            _ => false,
        }
    }

    /// Fails with [`PathError::DriveMismatch`] when `right` carries a drive that does not match
    /// `left`. A missing `right` drive always passes.
    pub(crate) fn check_compatible(left: Option<Drive>, right: Option<Drive>) -> Result<()> {
        if right.is_none() || Self::matches_option(left, right) {
            Ok(())
        } else {
            log::debug!(
                "drive mismatch between {:?} and {:?}",
                left.map(Drive::letter),
                right.map(Drive::letter)
            );
            Err(PathError::DriveMismatch { left, right })
        }
    }
}

impl fmt::Debug for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<char> for Drive {
    type Error = PathError;

    fn try_from(letter: char) -> Result<Self> {
        Self::new(letter)
    }
}

impl FromStr for Drive {
    type Err = PathError;

    /// Parses either a bare letter (`C`) or a letter followed by a colon (`C:`).
    fn from_str(s: &str) -> Result<Self> {
        let letters = s.strip_suffix(':').unwrap_or(s);
        let mut chars = letters.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(PathError::InvalidDrive {
                value: s.to_string(),
            }),
        }
    }
}
