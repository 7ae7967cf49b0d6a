/// Styled alphabets selectable with a font switch such as `bb` or `mathcal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Bold,
    DoubleStruck,
    Script,
    Monospace,
    Fraktur,
    SansSerif,
}

impl Font {
    /// The font selected by the output name of a unary symbol, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bb" => Font::Bold,
            "bbb" => Font::DoubleStruck,
            "cc" => Font::Script,
            "tt" => Font::Monospace,
            "fr" => Font::Fraktur,
            "sf" => Font::SansSerif,
            _ => return None,
        })
    }

    /// Map a character to its styled equivalent, or return it unchanged when the alphabet has no
    /// such letter.
    pub fn map_char(self, c: char) -> char {
        let mapped = match (self, c) {
            // Bold mappings
            (Font::Bold, 'A'..='Z') => c as u32 + 0x1D3BF,
            (Font::Bold, 'a'..='z') => c as u32 + 0x1D3B9,
            (Font::Bold, '0'..='9') => c as u32 + 0x1D79E,

            // Double Struck mappings
            (Font::DoubleStruck, 'A' | 'B' | 'D'..='G' | 'I'..='M' | 'O' | 'S'..='Y') => {
                c as u32 + 0x1D4F7
            }
            (Font::DoubleStruck, 'C') => c as u32 + 0x20BF,
            (Font::DoubleStruck, 'H') => c as u32 + 0x20C5,
            (Font::DoubleStruck, 'N') => c as u32 + 0x20C7,
            (Font::DoubleStruck, 'P' | 'Q') => c as u32 + 0x20C9,
            (Font::DoubleStruck, 'R') => c as u32 + 0x20CB,
            (Font::DoubleStruck, 'Z') => c as u32 + 0x20CA,
            (Font::DoubleStruck, 'j') => c as u32 + 0x20DF,
            (Font::DoubleStruck, 'a'..='z') => c as u32 + 0x1D4F1,
            (Font::DoubleStruck, '0'..='9') => c as u32 + 0x1D7A8,

            // Script mappings
            (Font::Script, 'A' | 'C' | 'D' | 'G' | 'J' | 'K' | 'N'..='Q' | 'S'..='Z') => {
                c as u32 + 0x1D45B
            }
            (Font::Script, 'B') => c as u32 + 0x20EA,
            (Font::Script, 'E' | 'F') => c as u32 + 0x20EB,
            (Font::Script, 'H') => c as u32 + 0x20C3,
            (Font::Script, 'I') => c as u32 + 0x20C7,
            (Font::Script, 'L') => c as u32 + 0x20C6,
            (Font::Script, 'M') => c as u32 + 0x20E6,
            (Font::Script, 'R') => c as u32 + 0x20C9,
            (Font::Script, 'a'..='d' | 'f' | 'h'..='n' | 'p'..='z') => c as u32 + 0x1D455,
            (Font::Script, 'e') => c as u32 + 0x20CA,
            (Font::Script, 'g') => c as u32 + 0x20A3,
            (Font::Script, 'o') => c as u32 + 0x20C5,

            // Monospace mappings
            (Font::Monospace, 'A'..='Z') => c as u32 + 0x1D62F,
            (Font::Monospace, 'a'..='z') => c as u32 + 0x1D629,
            (Font::Monospace, '0'..='9') => c as u32 + 0x1D7C6,

            // Fraktur mappings
            (Font::Fraktur, 'A' | 'B' | 'D'..='G' | 'J'..='Q' | 'S'..='Y') => c as u32 + 0x1D4C3,
            (Font::Fraktur, 'C') => c as u32 + 0x20EA,
            (Font::Fraktur, 'H') => c as u32 + 0x20C4,
            (Font::Fraktur, 'I') => c as u32 + 0x20C8,
            (Font::Fraktur, 'R') => c as u32 + 0x20CA,
            (Font::Fraktur, 'Z') => c as u32 + 0x20CE,
            (Font::Fraktur, 'a'..='z') => c as u32 + 0x1D4BD,

            // Sans Serif mappings
            (Font::SansSerif, 'A'..='Z') => c as u32 + 0x1D55F,
            (Font::SansSerif, 'a'..='z') => c as u32 + 0x1D559,
            (Font::SansSerif, '0'..='9') => c as u32 + 0x1D7B2,

            _ => return c,
        };
        char::from_u32(mapped).unwrap_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::Font;

    fn map(font: Font, input: &str) -> String {
        input.chars().map(|c| font.map_char(c)).collect()
    }

    #[test]
    fn names() {
        assert_eq!(Font::from_name("bbb"), Some(Font::DoubleStruck));
        assert_eq!(Font::from_name("mathbb"), None);
        assert_eq!(Font::from_name("sqrt"), None);
    }

    #[test]
    fn alphabets() {
        assert_eq!(map(Font::Bold, "Ab1"), "𝐀𝐛𝟏");
        assert_eq!(map(Font::DoubleStruck, "CHNPQRZaij0"), "ℂℍℕℙℚℝℤ𝕒𝕚ⅉ𝟘");
        assert_eq!(map(Font::Script, "CAL"), "𝒞𝒜ℒ");
        assert_eq!(map(Font::Script, "BEFHIMRego"), "ℬℰℱℋℐℳℛℯℊℴ");
        assert_eq!(map(Font::Monospace, "Az9"), "𝙰𝚣𝟿");
        assert_eq!(map(Font::Fraktur, "CHIRZa"), "ℭℌℑℜℨ𝔞");
        assert_eq!(map(Font::SansSerif, "Aa0"), "𝖠𝖺𝟢");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(map(Font::Script, "+1"), "+1");
        assert_eq!(map(Font::Fraktur, "7"), "7");
        assert_eq!(map(Font::Bold, "αΩ"), "αΩ");
    }

    #[test]
    fn fraktur_capitals_outside_the_block() {
        assert_eq!(Font::Fraktur.map_char('H'), '\u{210C}');
        assert_eq!(Font::Fraktur.map_char('I'), '\u{2111}');
        assert_eq!(map(Font::Fraktur, "GHIJ"), "𝔊ℌℑ𝔍");
    }
}
