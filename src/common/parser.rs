pub type ParseResult<'a, T> = Result<(ParseInput<'a>, T), ParseError>;
pub type ParseInput<'a> = &'a str;
pub type ParseError = &'static str;

/// Raw pieces of a path string, before atom validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Drive letter found in front of the path content, if any
    pub drive: Option<char>,

    /// Whether the path content began with a separator
    pub rooted: bool,

    /// Non-empty segments between separators
    pub atoms: Vec<&'a str>,

    /// Whether the path ended with a separator after at least one atom
    pub trailing_separator: bool,
}

/// Tokenizes the separator-delimited body of a path, shared by both dialects.
///
/// Repeated separators collapse, so `a//b` and `a/b` both yield the atoms `a` and `b`. A
/// separator at the very end only counts as trailing when at least one atom precedes it.
pub fn body(
    is_separator: impl Fn(char) -> bool + Copy,
) -> impl Fn(ParseInput) -> ParseResult<Tokens> {
    move |start: ParseInput| {
        let (input, root) = maybe(one_or_more(separator(is_separator)))(start)?;
        let (input, atoms) = zero_or_more(suffixed(
            take_until_char(is_separator),
            zero_or_more(separator(is_separator)),
        ))(input)?;

        let consumed = &start[..(start.len() - input.len())];
        let trailing_separator = !atoms.is_empty() && consumed.ends_with(is_separator);

        Ok((
            input,
            Tokens {
                drive: None,
                rooted: root.is_some(),
                atoms,
                trailing_separator,
            },
        ))
    }
}

/// Runs `parser` over the complete input, failing if anything is left unconsumed.
pub fn complete<'a, T>(
    parser: impl Fn(ParseInput<'a>) -> ParseResult<'a, T>,
) -> impl Fn(ParseInput<'a>) -> Result<T, ParseError> {
    move |input: ParseInput<'a>| {
        let (input, value) = parser(input)?;
        if !input.is_empty() {
            return Err("Did not fully parse input");
        }
        Ok(value)
    }
}

/// Execute two parsers in a row, failing if either fails, and returns first parser's result
pub fn suffixed<'a, T1, T2>(
    parser: impl Fn(ParseInput<'a>) -> ParseResult<'a, T1>,
    suffix: impl Fn(ParseInput<'a>) -> ParseResult<'a, T2>,
) -> impl Fn(ParseInput<'a>) -> ParseResult<'a, T1> {
    move |input: ParseInput<'a>| {
        let (input, value) = parser(input)?;
        let (input, _) = suffix(input)?;
        Ok((input, value))
    }
}

/// Execute a parser, returning Some(value) if succeeds and None if fails
pub fn maybe<'a, T>(
    parser: impl Fn(ParseInput<'a>) -> ParseResult<'a, T>,
) -> impl Fn(ParseInput<'a>) -> ParseResult<'a, Option<T>> {
    move |input: ParseInput<'a>| match parser(input) {
        Ok((input, value)) => Ok((input, Some(value))),
        Err(_) => Ok((input, None)),
    }
}

/// Takes while the parser succeeds, returning a collection of parser results, or failing if
/// the parser did not succeed at least once
pub fn one_or_more<'a, T>(
    parser: impl Fn(ParseInput<'a>) -> ParseResult<'a, T>,
) -> impl Fn(ParseInput<'a>) -> ParseResult<'a, Vec<T>> {
    move |mut input: ParseInput<'a>| {
        let mut results = Vec::new();
        while let Ok((next, value)) = parser(input) {
            // A parser that consumes nothing would spin forever
            if next.len() == input.len() {
                break;
            }

            input = next;
            results.push(value);
        }

        if results.is_empty() {
            return Err("Parser failed to succeed once");
        }

        Ok((input, results))
    }
}

/// Same as [`one_or_more`], but won't fail if the parser never succeeds
pub fn zero_or_more<'a, T>(
    parser: impl Fn(ParseInput<'a>) -> ParseResult<'a, T>,
) -> impl Fn(ParseInput<'a>) -> ParseResult<'a, Vec<T>> {
    let parser = maybe(one_or_more(parser));

    move |input: ParseInput<'a>| {
        let (input, results) = parser(input)?;
        Ok((input, results.unwrap_or_default()))
    }
}

/// Takes until `predicate` returns true, failing if nothing parsed
pub fn take_until_char(
    predicate: impl Fn(char) -> bool,
) -> impl Fn(ParseInput) -> ParseResult<ParseInput> {
    move |input: ParseInput| {
        if input.is_empty() {
            return Err("Empty input");
        }

        let (input, value) = match input.char_indices().find(|(_, c)| predicate(*c)) {
            Some((i, _)) => (&input[i..], &input[..i]),
            None => ("", input),
        };

        if value.is_empty() {
            return Err("Predicate immediately returned true");
        }

        Ok((input, value))
    }
}

/// Parse a single char, failing if it does not satisfy `predicate`
pub fn char_matching(
    predicate: impl Fn(char) -> bool,
) -> impl Fn(ParseInput) -> ParseResult<char> {
    move |input: ParseInput| match input.chars().next() {
        Some(c) if predicate(c) => Ok((&input[c.len_utf8()..], c)),
        Some(_) => Err("Wrong char"),
        None => Err("Empty input"),
    }
}

/// Parse a single separator as defined by `is_separator`
pub fn separator(
    is_separator: impl Fn(char) -> bool,
) -> impl Fn(ParseInput) -> ParseResult<char> {
    char_matching(is_separator)
}
