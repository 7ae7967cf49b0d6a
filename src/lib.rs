//! This crate converts AsciiMath notation into a single line of Unicode text that approximates
//! typeset math, such as `sum_(i=1)^n i^3` into `∑ᵢ₌₁ⁿ i³`.
//!
//! Conversion happens in three stages: the [`tokenize`](parser::lex::tokenize) function splits the
//! input against the [`SymbolTable`](parser::tables::SymbolTable), the [`Parser`] builds an
//! [`Expression`] tree, and the renderer in the [`unicode`] module walks the tree according to a
//! [`RenderConfig`]. The [`convert`] function runs all three.
//!
//! ```
//! use asciimath_unicode::{convert, RenderConfig};
//!
//! let output = convert("x_i^2 + 1/2", RenderConfig::default()).unwrap();
//! assert_eq!(output, "xᵢ² + ½");
//! ```

pub mod ast;
pub(crate) mod attribute;
pub mod config;
pub mod parser;
pub mod unicode;

#[doc(inline)]
pub use ast::Expression;
#[doc(inline)]
pub use config::RenderConfig;
#[doc(inline)]
pub use parser::{parse, Parser, ParserError};
#[doc(inline)]
pub use unicode::{push_unicode, render, write_unicode};

/// Parse `input` and render it with the given configuration.
///
/// Malformed notation is reproduced literally; an error only signals an internal inconsistency.
pub fn convert(input: &str, config: RenderConfig) -> Result<String, ParserError> {
    let expression = parse(input)?;
    Ok(render(&expression, config))
}
