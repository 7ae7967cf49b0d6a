//! The expression tree produced by the [`Parser`](crate::parser::Parser) and consumed by the
//! renderer in the [`unicode`](crate::unicode) module.
//!
//! The tree is layered the same way the grammar is: [`Simple`] nodes are the atoms and prefix
//! applications, an [`Intermediate`] is a simple node optionally carrying scripts, and an
//! [`Element`] of an [`Expression`] is either an intermediate node or a [`Fraction`] of two of
//! them. Every node owns its children; nothing is shared and nothing is mutated once built.

/// An atomic leaf: a literal character, a number, quoted text, or the output glyph of a symbol.
///
/// The whitespace that followed the token in the input is kept alongside the text so that the
/// renderer can decide whether to reproduce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<'a> {
    pub text: &'a str,
    pub whitespace: &'a str,
}

impl<'a> Value<'a> {
    pub const fn new(text: &'a str, whitespace: &'a str) -> Self {
        Self { text, whitespace }
    }

    /// The value synthesized in place of a missing closing bracket.
    pub const fn empty() -> Self {
        Self::new("", "")
    }
}

/// A bracketed sub-expression.
///
/// `close` is [`Value::empty`] when the input ran out before a matching closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren<'a> {
    pub open: Value<'a>,
    pub body: Expression<'a>,
    pub close: Value<'a>,
}

/// A one-argument prefix construct, such as `sqrt x`, `hat x`, or `bb "R"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary<'a> {
    pub name: Value<'a>,
    pub arg: Box<Simple<'a>>,
}

/// A two-argument prefix construct, such as `root 3 x` or `frac a b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary<'a> {
    pub name: Value<'a>,
    pub first: Box<Simple<'a>>,
    pub second: Box<Simple<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simple<'a> {
    Value(Value<'a>),
    Paren(Paren<'a>),
    Unary(Unary<'a>),
    Binary(Binary<'a>),
}

/// A base with a single superscript or subscript.
///
/// `whitespace` is the whitespace that followed the `^` or `_` trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'a> {
    pub base: Simple<'a>,
    pub whitespace: &'a str,
    pub script: Simple<'a>,
}

/// A base followed by a subscript and then a superscript, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsuperscript<'a> {
    pub base: Simple<'a>,
    pub sub_whitespace: &'a str,
    pub sub: Simple<'a>,
    pub sup_whitespace: &'a str,
    pub sup: Simple<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intermediate<'a> {
    Simple(Simple<'a>),
    Superscript(Script<'a>),
    Subscript(Script<'a>),
    Subsuperscript(Subsuperscript<'a>),
}

/// Two intermediate nodes joined by a `/`.
///
/// A `frac a b` construct is parsed as a [`Binary`] and only turned into a fraction by the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction<'a> {
    pub numerator: Intermediate<'a>,
    pub whitespace: &'a str,
    pub denominator: Intermediate<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'a> {
    Intermediate(Intermediate<'a>),
    Fraction(Fraction<'a>),
}

/// An ordered sequence of elements: a whole input, or the body of a [`Paren`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression<'a> {
    pub elements: Vec<Element<'a>>,
}

impl<'a> Expression<'a> {
    pub fn new(elements: Vec<Element<'a>>) -> Self {
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> From<Value<'a>> for Simple<'a> {
    fn from(value: Value<'a>) -> Self {
        Simple::Value(value)
    }
}

impl<'a> From<Simple<'a>> for Intermediate<'a> {
    fn from(simple: Simple<'a>) -> Self {
        Intermediate::Simple(simple)
    }
}

impl<'a> From<Value<'a>> for Intermediate<'a> {
    fn from(value: Value<'a>) -> Self {
        Intermediate::Simple(value.into())
    }
}

impl<'a> From<Intermediate<'a>> for Element<'a> {
    fn from(intermediate: Intermediate<'a>) -> Self {
        Element::Intermediate(intermediate)
    }
}

impl<'a> From<Simple<'a>> for Element<'a> {
    fn from(simple: Simple<'a>) -> Self {
        Element::Intermediate(simple.into())
    }
}

impl<'a> From<Value<'a>> for Element<'a> {
    fn from(value: Value<'a>) -> Self {
        Element::Intermediate(value.into())
    }
}

impl<'a> From<Fraction<'a>> for Element<'a> {
    fn from(fraction: Fraction<'a>) -> Self {
        Element::Fraction(fraction)
    }
}
