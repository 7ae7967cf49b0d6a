#![no_main]

use asciimath_unicode::{parse, render, RenderConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, [bool; 6])| {
    let (input, [preserve_whitespace, prune_parens, vulgar_fractions, fraction_slash, convert_fractions, script_fractions]) = data;
    let config = RenderConfig {
        preserve_whitespace,
        prune_parens,
        vulgar_fractions,
        fraction_slash,
        convert_fractions,
        script_fractions,
    };

    // Malformed notation must degrade, never fail.
    let expression = parse(input).unwrap();
    let first = render(&expression, config);
    let second = render(&expression, config);
    assert_eq!(first, second);
});
