/// Switches controlling how an [`Expression`](crate::ast::Expression) is rendered.
///
/// Every switch is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RenderConfig {
    /// If true, the whitespace following each token in the input is reproduced in the output.
    /// (default: true)
    pub preserve_whitespace: bool,
    /// If true, the brackets around the argument of a script, a root, or a bracketing function
    /// such as `abs` are dropped, so that `x^(ab)` renders as `xᵃᵇ`. (default: true)
    pub prune_parens: bool,
    /// If true, fractions such as `1/2` use precomposed glyphs like `½` when one exists, and
    /// `1/x` uses `⅟` in front of a subscript denominator. (default: true)
    pub vulgar_fractions: bool,
    /// If true, fractions of a superscript over a subscript are separated by the fraction slash
    /// `⁄` rather than the solidus `/`. (default: true)
    pub fraction_slash: bool,
    /// If true, `frac a b` is rendered like `a/b`. Otherwise the name and both arguments are
    /// kept as written. (default: true)
    pub convert_fractions: bool,
    /// If true, fractions whose numerator and denominator have superscript and subscript forms
    /// are rendered as such. (default: true)
    pub script_fractions: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preserve_whitespace: true,
            prune_parens: true,
            vulgar_fractions: true,
            fraction_slash: true,
            convert_fractions: true,
            script_fractions: true,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::RenderConfig;

    #[test]
    fn missing_fields_default() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "vulgarFractions": false, "fractionSlash": false }"#)
                .unwrap();
        assert_eq!(
            config,
            RenderConfig {
                vulgar_fractions: false,
                fraction_slash: false,
                ..Default::default()
            }
        );
    }
}
