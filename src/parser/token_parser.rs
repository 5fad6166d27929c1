use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, value};
use nom::{IResult, Parser};

/// Lexical unit of a tab line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabToken<'a> {
    /// Run of ASCII digits
    Digits(&'a [u8]),
    /// End of the current string line
    Newline,
    /// Any other single byte (`-`, `|`, space...)
    Filler(u8),
}

impl TabToken<'_> {
    /// Number of columns covered by the token
    pub const fn width(&self) -> usize {
        match self {
            TabToken::Digits(digits) => digits.len(),
            TabToken::Newline => 0,
            TabToken::Filler(_) => 1,
        }
    }
}

/// Parse the next token
pub fn parse_token(i: &[u8]) -> IResult<&[u8], TabToken<'_>> {
    alt((
        map(digit1, TabToken::Digits),
        value(TabToken::Newline, char('\n')),
        map(take(1usize), |b: &[u8]| TabToken::Filler(b[0])),
    ))
    .parse(i)
}

/// Lazily split `data` into tokens
pub fn tokens(data: &[u8]) -> impl Iterator<Item = TabToken<'_>> {
    let mut rest = data;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match parse_token(rest) {
            Ok((inner, token)) => {
                rest = inner;
                Some(token)
            }
            Err(err) => {
                // unreachable with a non empty input, the last alternative takes any byte
                log::debug!("Tokenizer stopped: {err:?}");
                None
            }
        }
    })
}

/// Parse a digit run into a fret number, keeping at most `max_digits` leading digits
pub fn parse_fret(digits: &[u8], max_digits: usize) -> u32 {
    digits
        .iter()
        .take(max_digits)
        .fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}
