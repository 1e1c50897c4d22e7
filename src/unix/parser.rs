use crate::{
    common::parser::*,
    unix::SEPARATOR,
};

/// Splits a POSIX path string into [`Tokens`].
///
/// ### Details
///
/// A leading `/` marks the path as rooted. Repeated separators collapse, so `/foo//bar` yields the
/// atoms `foo` and `bar`. A trailing `/` sets the trailing separator flag without producing an
/// empty atom. No `.` or `..` handling happens here.
pub fn parse(input: ParseInput) -> Result<Tokens, ParseError> {
    complete(body(is_separator))(input)
}

#[inline]
pub fn is_separator(c: char) -> bool {
    c == SEPARATOR
}
