//! Rendering an [`Expression`] into a single line of Unicode text.
//!
//! Scripts and fractions are collapsed into superscript and subscript characters when every
//! character of the operand has such a form. The check renders the operand, maps it, and throws
//! the result away on the first unmappable character, after which the operand is rendered again
//! literally. Nested failing scripts are therefore rendered once per level of nesting.
mod tables;

use std::io;

use log::debug;

use crate::{
    ast::{
        Binary, Element, Expression, Fraction, Intermediate, Paren, Script, Simple,
        Subsuperscript, Unary, Value,
    },
    attribute::Font,
    config::RenderConfig,
};

use self::tables::{
    bracket_function, combining_mark, is_combining_mark, marks_every_char, radical,
    vulgar_fraction, FRACTION_SLASH, ONE_OVER, OVERLINE, SUBSCRIPTS, SUPERSCRIPTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn map(self) -> &'static phf::Map<char, char> {
        match self {
            Direction::Up => &SUPERSCRIPTS,
            Direction::Down => &SUBSCRIPTS,
        }
    }
}

/// Anything that can stand on either side of a fraction.
///
/// A `/` fraction has intermediate operands, while a converted `frac` keyword has simple ones.
trait Operand {
    fn render(&self, renderer: &Renderer, out: &mut String);

    /// The operand as a simple node, if it carries no script and is not a fraction.
    fn as_simple(&self) -> Option<&Simple<'_>>;
}

impl Operand for Simple<'_> {
    fn render(&self, renderer: &Renderer, out: &mut String) {
        renderer.simple(self, out);
    }

    fn as_simple(&self) -> Option<&Simple<'_>> {
        Some(self)
    }
}

impl Operand for Intermediate<'_> {
    fn render(&self, renderer: &Renderer, out: &mut String) {
        renderer.intermediate(self, out);
    }

    fn as_simple(&self) -> Option<&Simple<'_>> {
        match self {
            Intermediate::Simple(simple) => Some(simple),
            _ => None,
        }
    }
}

impl Operand for Element<'_> {
    fn render(&self, renderer: &Renderer, out: &mut String) {
        renderer.element(self, out);
    }

    fn as_simple(&self) -> Option<&Simple<'_>> {
        match self {
            Element::Intermediate(intermediate) => intermediate.as_simple(),
            Element::Fraction(_) => None,
        }
    }
}

/// The text of a value, looking through brackets that hold nothing else.
fn literal_value(operand: &dyn Operand) -> Option<&str> {
    let mut simple = operand.as_simple()?;
    loop {
        match simple {
            Simple::Value(value) => return Some(value.text),
            Simple::Paren(Paren { body, .. }) => match body.elements.as_slice() {
                [element] => simple = element.as_simple()?,
                _ => return None,
            },
            Simple::Unary(_) | Simple::Binary(_) => return None,
        }
    }
}

/// Split text into base characters, each with the combining marks that follow it.
///
/// A mark at the very start of the text has no base and forms a cluster on its own.
fn clusters(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let mut chars = rest.char_indices();
        chars.next()?;
        let end = chars
            .find(|&(_, c)| !is_combining_mark(c))
            .map_or(rest.len(), |(index, _)| index);
        let (cluster, tail) = rest.split_at(end);
        rest = tail;
        Some(cluster)
    })
}

/// Push every cluster of `text` followed by `mark`.
fn mark_every_cluster(text: &str, mark: char, out: &mut String) {
    for cluster in clusters(text) {
        out.push_str(cluster);
        out.push(mark);
    }
}

struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn whitespace(&self, whitespace: &str, out: &mut String) {
        if self.config.preserve_whitespace {
            out.push_str(whitespace);
        }
    }

    fn value(&self, value: &Value, out: &mut String) {
        out.push_str(value.text);
        self.whitespace(value.whitespace, out);
    }

    fn paren(&self, paren: &Paren, out: &mut String) {
        self.value(&paren.open, out);
        self.expression(&paren.body, out);
        self.value(&paren.close, out);
    }

    /// Render an operand, dropping its brackets if it is a bracketed group and pruning is on.
    fn pruned(&self, operand: &dyn Operand, out: &mut String) {
        match operand.as_simple() {
            Some(Simple::Paren(paren)) if self.config.prune_parens => {
                self.expression(&paren.body, out)
            }
            _ => operand.render(self, out),
        }
    }

    /// The operand written in superscript or subscript characters, or `None` if some
    /// character has no such form. Whitespace is kept as is.
    fn script_form(&self, operand: &dyn Operand, direction: Direction) -> Option<String> {
        let mut plain = String::new();
        self.pruned(operand, &mut plain);
        let map = direction.map();
        let mapped = plain
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    Some(c)
                } else {
                    map.get(&c).copied()
                }
            })
            .collect::<Option<String>>();
        if mapped.is_none() {
            debug!("`{plain}` has no {direction:?} script form");
        }
        mapped
    }

    fn unary(&self, unary: &Unary, out: &mut String) {
        let name = unary.name.text;
        let arg = &*unary.arg;

        if let Some(font) = Font::from_name(name) {
            let mut text = String::new();
            self.simple(arg, &mut text);
            out.extend(text.chars().map(|c| font.map_char(c)));
        } else if name == "sqrt" {
            out.push('√');
            let mut text = String::new();
            self.pruned(arg, &mut text);
            mark_every_cluster(&text, OVERLINE, out);
        } else if name == "text" || name == "mbox" {
            self.simple(arg, out);
        } else if let Some(mark) = combining_mark(name) {
            let mut text = String::new();
            self.simple(arg, &mut text);
            if marks_every_char(name) {
                mark_every_cluster(&text, mark, out);
            } else {
                let parts: Vec<_> = clusters(&text).collect();
                let middle = parts.len().saturating_sub(1) / 2;
                for (index, cluster) in parts.into_iter().enumerate() {
                    out.push_str(cluster);
                    if index == middle {
                        out.push(mark);
                    }
                }
            }
        } else if let Some((left, right)) = bracket_function(name) {
            out.push_str(left);
            self.pruned(arg, out);
            out.push_str(right);
        } else {
            self.value(&unary.name, out);
            self.simple(arg, out);
        }
    }

    fn binary(&self, binary: &Binary, out: &mut String) {
        let first = &*binary.first;
        let second = &*binary.second;
        match binary.name.text {
            "root" => {
                if let Some(sign) = literal_value(first).and_then(radical) {
                    out.push(sign);
                    let mut text = String::new();
                    self.pruned(second, &mut text);
                    mark_every_cluster(&text, OVERLINE, out);
                    return;
                }
            }
            "frac" if self.config.convert_fractions => {
                self.fraction(first, binary.name.whitespace, second, out);
                return;
            }
            _ => {}
        }
        self.value(&binary.name, out);
        self.simple(first, out);
        self.simple(second, out);
    }

    fn simple(&self, simple: &Simple, out: &mut String) {
        match simple {
            Simple::Value(value) => self.value(value, out),
            Simple::Paren(paren) => self.paren(paren, out),
            Simple::Unary(unary) => self.unary(unary, out),
            Simple::Binary(binary) => self.binary(binary, out),
        }
    }

    fn script(&self, script: &Script, direction: Direction, out: &mut String) {
        self.simple(&script.base, out);
        match self.script_form(&script.script, direction) {
            Some(mapped) => {
                self.whitespace(script.whitespace, out);
                out.push_str(&mapped);
            }
            None => {
                out.push(match direction {
                    Direction::Up => '^',
                    Direction::Down => '_',
                });
                self.whitespace(script.whitespace, out);
                self.simple(&script.script, out);
            }
        }
    }

    fn subsuperscript(&self, scripts: &Subsuperscript, out: &mut String) {
        self.simple(&scripts.base, out);
        let sub = self.script_form(&scripts.sub, Direction::Down);
        let sup = self.script_form(&scripts.sup, Direction::Up);
        if let (Some(sub), Some(sup)) = (sub, sup) {
            self.whitespace(scripts.sub_whitespace, out);
            out.push_str(&sub);
            self.whitespace(scripts.sup_whitespace, out);
            out.push_str(&sup);
        } else {
            out.push('_');
            self.whitespace(scripts.sub_whitespace, out);
            self.simple(&scripts.sub, out);
            out.push('^');
            self.whitespace(scripts.sup_whitespace, out);
            self.simple(&scripts.sup, out);
        }
    }

    fn intermediate(&self, intermediate: &Intermediate, out: &mut String) {
        match intermediate {
            Intermediate::Simple(simple) => self.simple(simple, out),
            Intermediate::Superscript(script) => self.script(script, Direction::Up, out),
            Intermediate::Subscript(script) => self.script(script, Direction::Down, out),
            Intermediate::Subsuperscript(scripts) => self.subsuperscript(scripts, out),
        }
    }

    /// Render a fraction, preferring in order: a precomposed glyph, `⅟` with a subscript
    /// denominator, a superscript over a subscript, and finally the operands around a `/`.
    fn fraction(
        &self,
        numerator: &dyn Operand,
        whitespace: &str,
        denominator: &dyn Operand,
        out: &mut String,
    ) {
        let config = self.config;
        let numerator_value = literal_value(numerator);

        if config.vulgar_fractions {
            if let Some(glyph) = numerator_value
                .zip(literal_value(denominator))
                .and_then(|(numerator, denominator)| vulgar_fraction(numerator, denominator))
            {
                out.push_str(glyph);
                return;
            }
        }

        let sub = self.script_form(denominator, Direction::Down);
        if let Some(sub) = &sub {
            if config.vulgar_fractions && numerator_value == Some("1") {
                out.push(ONE_OVER);
                self.whitespace(whitespace, out);
                out.push_str(sub);
                return;
            }
        }

        if config.script_fractions {
            if let Some(sub) = &sub {
                if let Some(sup) = self.script_form(numerator, Direction::Up) {
                    out.push_str(&sup);
                    out.push(if config.fraction_slash { FRACTION_SLASH } else { '/' });
                    self.whitespace(whitespace, out);
                    out.push_str(sub);
                    return;
                }
            }
        }

        numerator.render(self, out);
        out.push('/');
        self.whitespace(whitespace, out);
        denominator.render(self, out);
    }

    fn element(&self, element: &Element, out: &mut String) {
        match element {
            Element::Intermediate(intermediate) => self.intermediate(intermediate, out),
            Element::Fraction(Fraction {
                numerator,
                whitespace,
                denominator,
            }) => self.fraction(numerator, whitespace, denominator, out),
        }
    }

    fn expression(&self, expression: &Expression, out: &mut String) {
        for element in &expression.elements {
            self.element(element, out);
        }
    }
}

/// Render the expression and append the output to `string`.
pub fn push_unicode(string: &mut String, expression: &Expression, config: RenderConfig) {
    Renderer::new(config).expression(expression, string);
}

/// Render the expression and write the output to `writer`.
pub fn write_unicode<W: io::Write>(
    mut writer: W,
    expression: &Expression,
    config: RenderConfig,
) -> io::Result<()> {
    let mut output = String::new();
    push_unicode(&mut output, expression, config);
    writer.write_all(output.as_bytes())
}

/// Render the expression into a new string.
pub fn render(expression: &Expression, config: RenderConfig) -> String {
    let mut output = String::new();
    push_unicode(&mut output, expression, config);
    output
}
