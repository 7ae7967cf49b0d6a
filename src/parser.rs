//! Contains the [`Parser`], which transforms input AsciiMath into an [`Expression`] tree.
//!
//! The parser is total: malformed notation such as a missing argument, an unmatched bracket, or
//! a dangling `/` is reproduced as literal values instead of being reported. The only errors it
//! returns are [`ParserError`]s signalling that the tokenizer and the symbol table disagree.
//!
//! The tree can be rendered with [`push_unicode`] and [`write_unicode`].
//!
//! [`push_unicode`]: crate::unicode::push_unicode
//! [`write_unicode`]: crate::unicode::write_unicode
mod error;
pub mod lex;
pub mod tables;

use log::trace;

use crate::ast::{
    Binary, Element, Expression, Fraction, Intermediate, Paren, Script, Simple, Subsuperscript,
    Unary, Value,
};

pub use self::error::ParserError;
use self::{
    error::ErrorKind,
    lex::{Token, TokenKind},
    tables::{Symbol, SymbolKind, SymbolTable},
};

/// A recursive descent parser over the tokens of a single input.
///
/// Speculative constructs (the two arguments of a binary symbol, a script, or the denominator of
/// a fraction) snapshot the cursor before trying and restore it when the construct is
/// incomplete.
#[derive(Debug)]
pub struct Parser<'a> {
    /// The whole input, used to locate errors.
    input: &'a str,
    /// Whitespace stripped from the start of the input before tokenizing.
    leading: &'a str,
    tokens: Vec<Token<'a>>,
    /// Index of the next unconsumed token.
    cursor: usize,
    table: &'static SymbolTable,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, ParserError> {
        let table = SymbolTable::global();
        let trimmed = input.trim_start();
        let leading = &input[..input.len() - trimmed.len()];
        let tokens = lex::tokenize(trimmed, table.spellings())?.collect();
        Ok(Self {
            input,
            leading,
            tokens,
            cursor: 0,
            table,
        })
    }

    /// Parse the whole input.
    ///
    /// Closing brackets that match no opener are kept in place as literal values.
    pub fn parse(mut self) -> Result<Expression<'a>, ParserError> {
        let mut elements = Vec::new();
        if !self.leading.is_empty() {
            elements.push(Value::new("", self.leading).into());
        }

        while self.cursor < self.tokens.len() {
            elements.extend(self.expression()?.elements);
            if let Some(token) = self.next_token() {
                let symbol = self.closing(token)?;
                trace!("unmatched closing bracket `{}`", token.value);
                elements.push(Value::new(symbol.output, token.whitespace).into());
            }
        }
        Ok(Expression::new(elements))
    }

    fn expression(&mut self) -> Result<Expression<'a>, ParserError> {
        let mut elements = Vec::new();
        while let Some(numerator) = self.intermediate()? {
            let Some(slash) = self.peek_symbol(&["/"]) else {
                elements.push(numerator.into());
                continue;
            };

            let reset = self.cursor;
            self.cursor += 1;
            let element: Element<'a> = match self.intermediate()? {
                Some(denominator) => Fraction {
                    numerator,
                    whitespace: slash.whitespace,
                    denominator,
                }
                .into(),
                None => {
                    trace!("fraction without denominator");
                    self.cursor = reset;
                    numerator.into()
                }
            };
            elements.push(element);
        }
        Ok(Expression::new(elements))
    }

    /// A simple node optionally followed by `_`, `^`, or `_` then `^`.
    ///
    /// A superscript is never followed by a subscript; `x^j_i` leaves the `_` for the caller.
    fn intermediate(&mut self) -> Result<Option<Intermediate<'a>>, ParserError> {
        let Some(base) = self.simple()? else {
            return Ok(None);
        };
        let Some(trigger) = self.peek_symbol(&["_", "^"]) else {
            return Ok(Some(base.into()));
        };

        let reset = self.cursor;
        self.cursor += 1;
        let Some(script) = self.simple()? else {
            trace!("`{}` without a script", trigger.value);
            self.cursor = reset;
            return Ok(Some(base.into()));
        };

        if trigger.value == "^" {
            return Ok(Some(Intermediate::Superscript(Script {
                base,
                whitespace: trigger.whitespace,
                script,
            })));
        }

        let sup_trigger = self.peek_symbol(&["^"]);
        let sup = match sup_trigger {
            Some(_) => {
                let reset = self.cursor;
                self.cursor += 1;
                let sup = self.simple()?;
                if sup.is_none() {
                    self.cursor = reset;
                }
                sup
            }
            None => None,
        };

        Ok(Some(match (sup_trigger, sup) {
            (Some(sup_trigger), Some(sup)) => Intermediate::Subsuperscript(Subsuperscript {
                base,
                sub_whitespace: trigger.whitespace,
                sub: script,
                sup_whitespace: sup_trigger.whitespace,
                sup,
            }),
            _ => Intermediate::Subscript(Script {
                base,
                whitespace: trigger.whitespace,
                script,
            }),
        }))
    }

    /// A value, a bracketed group, or a prefix application.
    ///
    /// Returns `None` at the end of the input and in front of a closing bracket, which is left
    /// unconsumed for whoever is waiting for it.
    fn simple(&mut self) -> Result<Option<Simple<'a>>, ParserError> {
        let Some(token) = self.tokens.get(self.cursor).copied() else {
            return Ok(None);
        };
        if token.kind != TokenKind::Symbol {
            self.cursor += 1;
            return Ok(Some(Value::new(token.value, token.whitespace).into()));
        }

        let symbol = self.symbol(token)?;
        let name = Value::new(symbol.output, token.whitespace);
        let simple = match symbol.kind {
            SymbolKind::Value | SymbolKind::Infix => {
                self.cursor += 1;
                name.into()
            }
            SymbolKind::Unary => {
                self.cursor += 1;
                match self.simple()? {
                    Some(arg) => Simple::Unary(Unary {
                        name,
                        arg: Box::new(arg),
                    }),
                    None => {
                        trace!("`{}` without an argument", token.value);
                        Value::new(token.value, token.whitespace).into()
                    }
                }
            }
            SymbolKind::Binary => {
                self.cursor += 1;
                let reset = self.cursor;
                let first = self.simple()?;
                let second = match first {
                    Some(_) => self.simple()?,
                    None => None,
                };
                match (first, second) {
                    (Some(first), Some(second)) => Simple::Binary(Binary {
                        name,
                        first: Box::new(first),
                        second: Box::new(second),
                    }),
                    _ => {
                        trace!("`{}` without two arguments", token.value);
                        self.cursor = reset;
                        Value::new(token.value, token.whitespace).into()
                    }
                }
            }
            SymbolKind::Left => {
                self.cursor += 1;
                let body = self.expression()?;
                let close = match self.next_token() {
                    Some(token) => {
                        let symbol = self.closing(token)?;
                        Value::new(symbol.output, token.whitespace)
                    }
                    None => {
                        trace!("unclosed bracket `{}`", token.value);
                        Value::empty()
                    }
                };
                Simple::Paren(Paren {
                    open: name,
                    body,
                    close,
                })
            }
            SymbolKind::Right => return Ok(None),
        };
        Ok(Some(simple))
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    /// The next token, if it is one of the given symbols.
    fn peek_symbol(&self, spellings: &[&str]) -> Option<Token<'a>> {
        self.tokens
            .get(self.cursor)
            .filter(|token| token.kind == TokenKind::Symbol && spellings.contains(&token.value))
            .copied()
    }

    fn symbol(&self, token: Token<'a>) -> Result<&'static Symbol, ParserError> {
        self.table
            .get(token.value)
            .ok_or_else(|| self.error(ErrorKind::UnknownSymbol(token.value.to_owned()), token))
    }

    /// Resolve a token that can only be a closing bracket.
    fn closing(&self, token: Token<'a>) -> Result<&'static Symbol, ParserError> {
        if token.kind != TokenKind::Symbol {
            return Err(self.error(ErrorKind::ExpectedSymbol(token.value.to_owned()), token));
        }
        let symbol = self.symbol(token)?;
        if symbol.kind != SymbolKind::Right {
            return Err(self.error(ErrorKind::ExpectedClose(token.value.to_owned()), token));
        }
        Ok(symbol)
    }

    fn error(&self, kind: ErrorKind, token: Token<'a>) -> ParserError {
        let index = (token.value.as_ptr() as usize).saturating_sub(self.input.as_ptr() as usize);
        ParserError::new(kind, self.input, index)
    }
}

/// Parse `input` into an [`Expression`].
///
/// Never fails on malformed notation; see [`ParserError`] for what an error means.
pub fn parse(input: &str) -> Result<Expression<'_>, ParserError> {
    Parser::new(input)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn val<'a>(text: &'a str, whitespace: &'a str) -> Simple<'a> {
        Value::new(text, whitespace).into()
    }

    fn elements(input: &str) -> Vec<Element<'_>> {
        parse(input).unwrap().elements
    }

    fn paren<'a>(open: &'a str, body: Vec<Element<'a>>, close: &'a str) -> Simple<'a> {
        Simple::Paren(Paren {
            open: Value::new(open, ""),
            body: Expression::new(body),
            close: Value::new(close, ""),
        })
    }

    #[test]
    fn unary() {
        assert_eq!(
            elements("sqrt 3"),
            vec![Simple::Unary(Unary {
                name: Value::new("sqrt", " "),
                arg: Box::new(val("3", "")),
            })
            .into()]
        );
    }

    #[test]
    fn unary_alias_resolves_to_output() {
        assert_eq!(
            elements("mathbb R"),
            vec![Simple::Unary(Unary {
                name: Value::new("bbb", " "),
                arg: Box::new(val("R", "")),
            })
            .into()]
        );
    }

    #[test]
    fn binary() {
        assert_eq!(
            elements("root 3 (x + 1)"),
            vec![Simple::Binary(Binary {
                name: Value::new("root", " "),
                first: Box::new(val("3", " ")),
                second: Box::new(Simple::Paren(Paren {
                    open: Value::new("(", ""),
                    body: Expression::new(vec![
                        val("x", " ").into(),
                        val("+", " ").into(),
                        val("1", "").into(),
                    ]),
                    close: Value::new(")", ""),
                })),
            })
            .into()]
        );
    }

    #[test]
    fn binary_without_arguments() {
        assert_eq!(elements("root"), vec![val("root", "").into()]);
        assert_eq!(
            elements("root(3)"),
            vec![
                val("root", "").into(),
                paren("(", vec![val("3", "").into()], ")").into(),
            ]
        );
    }

    #[test]
    fn unary_without_argument() {
        assert_eq!(
            elements("abs)"),
            vec![val("abs", "").into(), val(")", "").into()]
        );
        assert_eq!(elements("\\mathbb"), vec![val("mathbb", "").into()]);
    }

    #[test]
    fn dangling_scripts() {
        assert_eq!(
            elements("x^"),
            vec![val("x", "").into(), val("^", "").into()]
        );
        assert_eq!(
            elements("x_i^"),
            vec![
                Intermediate::Subscript(Script {
                    base: val("x", ""),
                    whitespace: "",
                    script: val("i", ""),
                })
                .into(),
                val("^", "").into(),
            ]
        );
    }

    #[test]
    fn superscript_then_subscript() {
        assert_eq!(
            elements("x^j_i"),
            vec![
                Intermediate::Superscript(Script {
                    base: val("x", ""),
                    whitespace: "",
                    script: val("j", ""),
                })
                .into(),
                val("_", "").into(),
                val("i", "").into(),
            ]
        );
    }

    #[test]
    fn subsuperscript() {
        assert_eq!(
            elements("x_ i^ j"),
            vec![Intermediate::Subsuperscript(Subsuperscript {
                base: val("x", ""),
                sub_whitespace: " ",
                sub: val("i", ""),
                sup_whitespace: " ",
                sup: val("j", ""),
            })
            .into()]
        );
    }

    #[test]
    fn dangling_fraction() {
        assert_eq!(
            elements("1/"),
            vec![val("1", "").into(), val("/", "").into()]
        );
    }

    #[test]
    fn fraction() {
        assert_eq!(
            elements("a/ b"),
            vec![Fraction {
                numerator: val("a", "").into(),
                whitespace: " ",
                denominator: val("b", "").into(),
            }
            .into()]
        );
    }

    #[test]
    fn leading_whitespace() {
        assert_eq!(elements(" "), vec![val("", " ").into()]);
        assert_eq!(
            elements(" 1"),
            vec![val("", " ").into(), val("1", "").into()]
        );
        assert_eq!(elements(""), vec![]);
    }

    #[test]
    fn unmatched_brackets() {
        assert_eq!(
            elements(":}["),
            vec![
                val("", "").into(),
                Simple::Paren(Paren {
                    open: Value::new("[", ""),
                    body: Expression::default(),
                    close: Value::empty(),
                })
                .into(),
            ]
        );
    }

    #[test]
    fn escaped_symbol() {
        assert_eq!(elements(r"\alpha"), vec![val("α", "").into()]);
    }

    #[test]
    fn sum() {
        let expected = vec![
            Intermediate::Subsuperscript(Subsuperscript {
                base: val("∑", ""),
                sub_whitespace: "",
                sub: paren(
                    "(",
                    vec![val("i", "").into(), val("=", "").into(), val("1", "").into()],
                    ")",
                ),
                sup_whitespace: "",
                sup: val("n", " "),
            })
            .into(),
            Intermediate::Superscript(Script {
                base: val("i", ""),
                whitespace: "",
                script: val("3", ""),
            })
            .into(),
            val("=", "").into(),
            Intermediate::Superscript(Script {
                base: paren(
                    "(",
                    vec![Fraction {
                        numerator: paren(
                            "(",
                            vec![
                                val("n", "").into(),
                                paren(
                                    "(",
                                    vec![
                                        val("n", "").into(),
                                        val("+", "").into(),
                                        val("1", "").into(),
                                    ],
                                    ")",
                                )
                                .into(),
                            ],
                            ")",
                        )
                        .into(),
                        whitespace: "",
                        denominator: val("2", "").into(),
                    }
                    .into()],
                    ")",
                ),
                whitespace: "",
                script: val("2", ""),
            })
            .into(),
        ];
        assert_eq!(elements("sum_(i=1)^n i^3=((n(n+1))/2)^2"), expected);
    }

    #[test]
    fn error_points_at_token() {
        let parser = Parser::new("ab").unwrap();
        let token = parser.tokens[1];
        let err = parser.error(ErrorKind::ExpectedClose(token.value.to_owned()), token);
        assert_eq!(err.context(), "ab");
        assert!(err.to_string().contains("expected a closing bracket, found `b`"));
    }
}
