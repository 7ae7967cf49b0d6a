//! Character tables used by the renderer.

use phf::phf_map;

/// U+0305 COMBINING OVERLINE, drawn over every cluster under a radical.
pub const OVERLINE: char = '\u{0305}';
/// U+2044 FRACTION SLASH.
pub const FRACTION_SLASH: char = '\u{2044}';
/// U+215F FRACTION NUMERATOR ONE.
pub const ONE_OVER: char = '\u{215F}';

pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    'a' => 'ᵃ', 'b' => 'ᵇ', 'c' => 'ᶜ', 'd' => 'ᵈ', 'e' => 'ᵉ', 'f' => 'ᶠ', 'g' => 'ᵍ',
    'h' => 'ʰ', 'i' => 'ⁱ', 'j' => 'ʲ', 'k' => 'ᵏ', 'l' => 'ˡ', 'm' => 'ᵐ', 'n' => 'ⁿ',
    'o' => 'ᵒ', 'p' => 'ᵖ', 'r' => 'ʳ', 's' => 'ˢ', 't' => 'ᵗ', 'u' => 'ᵘ', 'v' => 'ᵛ',
    'w' => 'ʷ', 'x' => 'ˣ', 'y' => 'ʸ', 'z' => 'ᶻ',
    'A' => 'ᴬ', 'B' => 'ᴮ', 'D' => 'ᴰ', 'E' => 'ᴱ', 'G' => 'ᴳ', 'H' => 'ᴴ', 'I' => 'ᴵ',
    'J' => 'ᴶ', 'K' => 'ᴷ', 'L' => 'ᴸ', 'M' => 'ᴹ', 'N' => 'ᴺ', 'O' => 'ᴼ', 'P' => 'ᴾ',
    'R' => 'ᴿ', 'T' => 'ᵀ', 'U' => 'ᵁ', 'V' => 'ⱽ', 'W' => 'ᵂ',
    '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
    '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
    '+' => '⁺', '-' => '⁻', '=' => '⁼', '(' => '⁽', ')' => '⁾',
    'α' => 'ᵅ', 'β' => 'ᵝ', 'γ' => 'ᵞ', 'δ' => 'ᵟ', 'ε' => 'ᵋ', 'θ' => 'ᶿ', 'ι' => 'ᶥ',
    'Φ' => 'ᶲ', 'φ' => 'ᵠ', 'ϕ' => 'ᵠ', 'χ' => 'ᵡ',
};

pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    'a' => 'ₐ', 'e' => 'ₑ', 'h' => 'ₕ', 'i' => 'ᵢ', 'k' => 'ₖ', 'l' => 'ₗ', 'm' => 'ₘ',
    'n' => 'ₙ', 'o' => 'ₒ', 'p' => 'ₚ', 'r' => 'ᵣ', 's' => 'ₛ', 't' => 'ₜ', 'u' => 'ᵤ',
    'v' => 'ᵥ', 'x' => 'ₓ',
    '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
    '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
    '+' => '₊', '-' => '₋', '=' => '₌', '(' => '₍', ')' => '₎',
    'β' => 'ᵦ', 'γ' => 'ᵧ', 'ρ' => 'ᵨ', 'φ' => 'ᵩ', 'ϕ' => 'ᵩ', 'χ' => 'ᵪ',
};

/// The precomposed glyph for `numerator/denominator`, if Unicode has one.
pub fn vulgar_fraction(numerator: &str, denominator: &str) -> Option<&'static str> {
    Some(match (numerator, denominator) {
        ("0", "3") => "↉",
        ("1", "10") => "⅒",
        ("1", "9") => "⅑",
        ("1", "8") => "⅛",
        ("1", "7") => "⅐",
        ("1", "6") => "⅙",
        ("1", "5") => "⅕",
        ("1", "4") => "¼",
        ("1", "3") => "⅓",
        ("1", "2") => "½",
        ("2", "5") => "⅖",
        ("2", "3") => "⅔",
        ("3", "8") => "⅜",
        ("3", "5") => "⅗",
        ("3", "4") => "¾",
        ("4", "5") => "⅘",
        ("5", "8") => "⅝",
        ("5", "6") => "⅚",
        ("7", "8") => "⅞",
        _ => return None,
    })
}

/// The radical sign for a root of the given index.
pub fn radical(index: &str) -> Option<char> {
    match index {
        "2" => Some('√'),
        "3" => Some('∛'),
        "4" => Some('∜'),
        _ => None,
    }
}

/// The combining mark drawn by an accent.
pub fn combining_mark(name: &str) -> Option<char> {
    match name {
        "~" => Some('\u{0303}'),
        "hat" => Some('\u{0302}'),
        "bar" => Some('\u{0304}'),
        "overline" => Some(OVERLINE),
        "vec" => Some('\u{20D7}'),
        "dot" => Some('\u{0307}'),
        "ddot" => Some('\u{0308}'),
        "ul" => Some('\u{0332}'),
        _ => None,
    }
}

/// Whether the accent spans its whole argument rather than sitting over the middle character.
pub fn marks_every_char(name: &str) -> bool {
    matches!(name, "ul" | "overline")
}

/// Whether `c` is one of the marks produced by [`combining_mark`].
pub fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0302}'..='\u{0305}' | '\u{0307}' | '\u{0308}' | '\u{0332}' | '\u{20D7}'
    )
}

/// The brackets drawn around the argument of `abs`, `floor`, `ceil`, and `norm`.
pub fn bracket_function(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "abs" => Some(("|", "|")),
        "floor" => Some(("⌊", "⌋")),
        "ceil" => Some(("⌈", "⌉")),
        "norm" => Some(("||", "||")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_gaps() {
        assert!(SUPERSCRIPTS.get(&'q').is_none());
        assert!(SUPERSCRIPTS.get(&'C').is_none());
        assert!(SUBSCRIPTS.get(&'j').is_none());
        assert!(SUBSCRIPTS.get(&'b').is_none());
        assert_eq!(SUPERSCRIPTS.get(&'V'), Some(&'ⱽ'));
    }

    #[test]
    fn marks_are_recognized() {
        for name in ["~", "hat", "bar", "overline", "vec", "dot", "ddot", "ul"] {
            let mark = combining_mark(name).unwrap();
            assert!(is_combining_mark(mark), "{name}");
        }
        assert!(!is_combining_mark('x'));
    }

    #[test]
    fn fractions() {
        assert_eq!(vulgar_fraction("0", "3"), Some("↉"));
        assert_eq!(vulgar_fraction("1", "10"), Some("⅒"));
        assert_eq!(vulgar_fraction("2", "4"), None);
    }
}
