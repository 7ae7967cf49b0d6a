//! Splitting raw input into [`Token`]s.
//!
//! Tokens are recognized in priority order: quoted text, numbers, the longest symbol spelling
//! matching the input, and finally a single character. The whitespace following a token is
//! attached to it, so tokens never carry leading whitespace.

use std::collections::HashSet;

use super::error::{ErrorKind, ParserError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A spelling found in the symbol table.
    Symbol,
    /// The content of a `"..."` run, quotes stripped.
    Text,
    /// An optionally negative decimal number.
    Number,
    /// Any single character that is none of the above.
    Char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub value: &'a str,
    pub kind: TokenKind,
    pub whitespace: &'a str,
}

impl<'a> Token<'a> {
    pub const fn new(value: &'a str, kind: TokenKind, whitespace: &'a str) -> Self {
        Self {
            value,
            kind,
            whitespace,
        }
    }
}

/// The set of symbol spellings the tokenizer matches against.
///
/// The maximum spelling length, in characters, bounds the greedy search.
#[derive(Debug, Clone, Default)]
pub struct Spellings<'s> {
    set: HashSet<&'s str>,
    max_len: usize,
}

impl<'s> Spellings<'s> {
    pub fn new<I>(spellings: I) -> Self
    where
        I: IntoIterator<Item = &'s str>,
    {
        let set: HashSet<&'s str> = spellings.into_iter().collect();
        let max_len = set.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        Self { set, max_len }
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.set.contains(spelling)
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<'s> FromIterator<&'s str> for Spellings<'s> {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Tokenize `input` against the given spellings.
///
/// The input must not start with whitespace; callers strip it and keep it themselves. This is
/// the only way tokenization can fail.
pub fn tokenize<'a, 's>(
    input: &'a str,
    spellings: &'s Spellings<'s>,
) -> Result<Tokenizer<'a, 's>, ParserError> {
    if input.starts_with(char::is_whitespace) {
        return Err(ParserError::new(ErrorKind::LeadingWhitespace, input, 0));
    }
    Ok(Tokenizer {
        rest: input,
        spellings,
    })
}

/// An iterator over the tokens of an input, created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 's> {
    rest: &'a str,
    spellings: &'s Spellings<'s>,
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.rest;
        let first = input.chars().next()?;

        let (value, kind, read) = if let Some((text, read)) = quoted_text(input) {
            (text, TokenKind::Text, read)
        } else if let Some(read) = number(input) {
            (&input[..read], TokenKind::Number, read)
        } else if let Some((symbol, read)) = symbol(input, self.spellings) {
            (symbol, TokenKind::Symbol, read)
        } else {
            let read = first.len_utf8();
            (&input[..read], TokenKind::Char, read)
        };

        let rest = &input[read..];
        let (whitespace, rest) = rest.split_at(rest.len() - rest.trim_start().len());
        self.rest = rest;
        Some(Token::new(value, kind, whitespace))
    }
}

/// Match `"..."`, returning the content and the number of bytes read.
fn quoted_text(input: &str) -> Option<(&str, usize)> {
    let body = input.strip_prefix('"')?;
    let end = body.find('"')?;
    Some((&body[..end], end + 2))
}

/// Match `-?([0-9]+(\.[0-9]*)?|[0-9]*\.[0-9]+)`, returning the number of bytes read.
fn number(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let sign = usize::from(bytes.first() == Some(&b'-'));
    let integer = digits(sign);
    let mut len = sign + integer;
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits(len + 1);
        if integer > 0 || fraction > 0 {
            len += 1 + fraction;
        }
    }
    (len > sign).then_some(len)
}

/// Match the longest spelling at the start of the input, returning the spelling and the number
/// of bytes read.
///
/// A backslash in front of anything but whitespace or another backslash escapes the spelling
/// that follows it: the backslash is read, but is not part of the returned spelling.
fn symbol<'a>(input: &'a str, spellings: &Spellings) -> Option<(&'a str, usize)> {
    let offset = match input.strip_prefix('\\').and_then(|rest| rest.chars().next()) {
        Some(c) if !c.is_whitespace() && c != '\\' => 1,
        _ => 0,
    };
    let candidate = &input[offset..];
    let limit = candidate
        .char_indices()
        .nth(spellings.max_len())
        .map_or(candidate.len(), |(index, _)| index);

    (1..=limit)
        .rev()
        .filter(|&end| candidate.is_char_boundary(end))
        .find(|&end| spellings.contains(&candidate[..end]))
        .map(|end| (&candidate[..end], offset + end))
}
