use crate::{
    common::parser::*,
    windows::{ALT_SEPARATOR, DRIVE_SEPARATOR, SEPARATOR},
};

/// Splits a Windows path string into [`Tokens`].
///
/// ### Details
///
/// An optional `LETTER:` prefix names the drive. Both `/` and `\` separate atoms. A separator at
/// the start of the content (after any drive) marks the path as rooted; whether that makes it
/// absolute or anchored is decided by the presence of the drive, not here.
///
/// As with POSIX paths, repeated separators collapse and a trailing separator only sets a flag.
pub fn parse(input: ParseInput) -> Result<Tokens, ParseError> {
    let (input, drive) = maybe(drive)(input)?;
    let mut tokens = complete(body(is_separator))(input)?;
    tokens.drive = drive;
    Ok(tokens)
}

#[inline]
pub fn is_separator(c: char) -> bool {
    c == SEPARATOR || c == ALT_SEPARATOR
}

/// Parses `LETTER:`, yielding the letter
fn drive(input: ParseInput) -> ParseResult<char> {
    suffixed(
        char_matching(|c| c.is_ascii_alphabetic()),
        char_matching(|c| c == DRIVE_SEPARATOR),
    )(input)
}
