//! The symbol table: every spelling the tokenizer recognizes, with the glyph it produces and how
//! the parser should treat it.
//!
//! Function names, accents, and fonts produce their own name as output; the renderer decides how
//! to draw them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::lex::Spellings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A constant.
    Value,
    /// A prefix operator taking one argument.
    Unary,
    /// A prefix operator taking two arguments.
    Binary,
    /// An opening bracket.
    Left,
    /// A closing bracket.
    Right,
    /// `/`, `_`, and `^`, which join their neighbours.
    Infix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub input: &'static str,
    /// An alternate spelling, usually the `LaTeX` name of the symbol.
    pub alias: Option<&'static str>,
    pub output: &'static str,
    pub kind: SymbolKind,
}

impl Symbol {
    /// Every spelling of the symbol.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.input).chain(self.alias)
    }
}

macro_rules! symbol {
    ($input:literal, $output:literal, $kind:ident) => {
        Symbol {
            input: $input,
            alias: None,
            output: $output,
            kind: SymbolKind::$kind,
        }
    };
    ($input:literal | $alias:literal, $output:literal, $kind:ident) => {
        Symbol {
            input: $input,
            alias: Some($alias),
            output: $output,
            kind: SymbolKind::$kind,
        }
    };
}

#[rustfmt::skip]
pub static SYMBOLS: &[Symbol] = &[
    // Greek letters
    symbol!("alpha", "α", Value),
    symbol!("beta", "β", Value),
    symbol!("chi", "χ", Value),
    symbol!("delta", "δ", Value),
    symbol!("Delta", "Δ", Value),
    symbol!("epsi" | "epsilon", "ε", Value),
    symbol!("varepsilon", "ɛ", Value),
    symbol!("eta", "η", Value),
    symbol!("gamma", "γ", Value),
    symbol!("Gamma", "Γ", Value),
    symbol!("iota", "ι", Value),
    symbol!("kappa", "κ", Value),
    symbol!("lambda", "λ", Value),
    symbol!("Lambda", "Λ", Value),
    symbol!("lamda", "λ", Value),
    symbol!("Lamda", "Λ", Value),
    symbol!("mu", "μ", Value),
    symbol!("nu", "ν", Value),
    symbol!("omega", "ω", Value),
    symbol!("Omega", "Ω", Value),
    symbol!("phi", "φ", Value),
    symbol!("varphi", "ϕ", Value),
    symbol!("Phi", "Φ", Value),
    symbol!("pi", "π", Value),
    symbol!("Pi", "Π", Value),
    symbol!("psi", "ψ", Value),
    symbol!("Psi", "Ψ", Value),
    symbol!("rho", "ρ", Value),
    symbol!("sigma", "σ", Value),
    symbol!("Sigma", "Σ", Value),
    symbol!("tau", "τ", Value),
    symbol!("theta", "θ", Value),
    symbol!("vartheta", "ϑ", Value),
    symbol!("Theta", "Θ", Value),
    symbol!("upsilon", "υ", Value),
    symbol!("xi", "ξ", Value),
    symbol!("Xi", "Ξ", Value),
    symbol!("zeta", "ζ", Value),

    // Operators
    symbol!("*" | "cdot", "⋅", Value),
    symbol!("**" | "ast", "∗", Value),
    symbol!("***" | "star", "⋆", Value),
    symbol!("//", "/", Value),
    symbol!(r"\\" | "backslash", r"\", Value),
    symbol!("setminus", r"\", Value),
    symbol!("xx" | "times", "×", Value),
    symbol!("|><" | "ltimes", "⋉", Value),
    symbol!("><|" | "rtimes", "⋊", Value),
    symbol!("|><|" | "bowtie", "⋈", Value),
    symbol!("-:" | "div", "÷", Value),
    symbol!("divide", "÷", Value),
    symbol!("@" | "circ", "∘", Value),
    symbol!("o+" | "oplus", "⊕", Value),
    symbol!("ox" | "otimes", "⊗", Value),
    symbol!("o." | "odot", "⊙", Value),
    symbol!("sum", "∑", Value),
    symbol!("prod", "∏", Value),
    symbol!("^^" | "wedge", "∧", Value),
    symbol!("^^^" | "bigwedge", "⋀", Value),
    symbol!("vv" | "vee", "∨", Value),
    symbol!("vvv" | "bigvee", "⋁", Value),
    symbol!("nn" | "cap", "∩", Value),
    symbol!("nnn" | "bigcap", "⋂", Value),
    symbol!("uu" | "cup", "∪", Value),
    symbol!("uuu" | "bigcup", "⋃", Value),

    // Relations
    symbol!("!=" | "ne", "≠", Value),
    symbol!(":=", ":=", Value),
    symbol!("lt", "<", Value),
    symbol!("<=" | "le", "≤", Value),
    symbol!("lt=" | "leq", "≤", Value),
    symbol!("gt", ">", Value),
    symbol!(">=" | "ge", "≥", Value),
    symbol!("gt=" | "geq", "≥", Value),
    symbol!("-<" | "prec", "≺", Value),
    symbol!("-lt", "≺", Value),
    symbol!(">-" | "succ", "≻", Value),
    symbol!("-<=" | "preceq", "⪯", Value),
    symbol!(">-=" | "succeq", "⪰", Value),
    symbol!("in", "∈", Value),
    symbol!("!in" | "notin", "∉", Value),
    symbol!("sub" | "subset", "⊂", Value),
    symbol!("sup" | "supset", "⊃", Value),
    symbol!("sube" | "subseteq", "⊆", Value),
    symbol!("supe" | "supseteq", "⊇", Value),
    symbol!("-=" | "equiv", "≡", Value),
    symbol!("~=" | "cong", "≅", Value),
    symbol!("~~" | "approx", "≈", Value),
    symbol!("prop" | "propto", "∝", Value),
    symbol!("mlt" | "ll", "≪", Value),
    symbol!("mgt" | "gg", "≫", Value),

    // Logic
    symbol!("and", "and", Value),
    symbol!("or", "or", Value),
    symbol!("not" | "neg", "¬", Value),
    symbol!("=>" | "implies", "⇒", Value),
    symbol!("if", "if", Value),
    symbol!("<=>" | "iff", "⇔", Value),
    symbol!("AA" | "forall", "∀", Value),
    symbol!("EE" | "exists", "∃", Value),
    symbol!("_|_" | "bot", "⊥", Value),
    symbol!("TT" | "top", "⊤", Value),
    symbol!("|--" | "vdash", "⊢", Value),
    symbol!("|==" | "models", "⊨", Value),

    // Miscellaneous
    symbol!("int", "∫", Value),
    symbol!("oint", "∮", Value),
    symbol!("del" | "partial", "∂", Value),
    symbol!("grad" | "nabla", "∇", Value),
    symbol!("+-" | "pm", "±", Value),
    symbol!("-+" | "mp", "∓", Value),
    symbol!("O/" | "emptyset", "∅", Value),
    symbol!("oo" | "infty", "∞", Value),
    symbol!("aleph", "ℵ", Value),
    symbol!("..." | "ldots", "…", Value),
    symbol!(":." | "therefore", "∴", Value),
    symbol!(":'" | "because", "∵", Value),
    symbol!("/_" | "angle", "∠", Value),
    symbol!(r"/_\" | "triangle", "△", Value),
    symbol!("'" | "prime", "′", Value),
    symbol!("quad", "\u{2003}", Value),
    symbol!("qquad", "\u{2003}\u{2003}", Value),
    symbol!("cdots", "⋯", Value),
    symbol!("vdots", "⋮", Value),
    symbol!("ddots", "⋱", Value),
    symbol!("diamond", "⋄", Value),
    symbol!("square", "□", Value),
    symbol!("frown", "⌢", Value),
    symbol!("|__" | "lfloor", "⌊", Value),
    symbol!("__|" | "rfloor", "⌋", Value),
    symbol!("|~" | "lceiling", "⌈", Value),
    symbol!("~|" | "rceiling", "⌉", Value),
    symbol!("CC", "ℂ", Value),
    symbol!("NN", "ℕ", Value),
    symbol!("QQ", "ℚ", Value),
    symbol!("RR", "ℝ", Value),
    symbol!("ZZ", "ℤ", Value),
    symbol!("lim", "lim", Value),
    symbol!("Lim", "Lim", Value),
    symbol!("dim", "dim", Value),
    symbol!("mod", "mod", Value),
    symbol!("lub", "lub", Value),
    symbol!("glb", "glb", Value),
    symbol!("min", "min", Value),
    symbol!("max", "max", Value),

    // Arrows
    symbol!("uarr" | "uparrow", "↑", Value),
    symbol!("darr" | "downarrow", "↓", Value),
    symbol!("rarr" | "rightarrow", "→", Value),
    symbol!("->" | "to", "→", Value),
    symbol!(">->" | "rightarrowtail", "↣", Value),
    symbol!("->>" | "twoheadrightarrow", "↠", Value),
    symbol!(">->>" | "twoheadrightarrowtail", "⤖", Value),
    symbol!("|->" | "mapsto", "↦", Value),
    symbol!("larr" | "leftarrow", "←", Value),
    symbol!("harr" | "leftrightarrow", "↔", Value),
    symbol!("rArr" | "Rightarrow", "⇒", Value),
    symbol!("lArr" | "Leftarrow", "⇐", Value),
    symbol!("hArr" | "Leftrightarrow", "⇔", Value),

    // Functions
    symbol!("sin", "sin", Unary),
    symbol!("cos", "cos", Unary),
    symbol!("tan", "tan", Unary),
    symbol!("sec", "sec", Unary),
    symbol!("csc", "csc", Unary),
    symbol!("cot", "cot", Unary),
    symbol!("arcsin", "arcsin", Unary),
    symbol!("arccos", "arccos", Unary),
    symbol!("arctan", "arctan", Unary),
    symbol!("sinh", "sinh", Unary),
    symbol!("cosh", "cosh", Unary),
    symbol!("tanh", "tanh", Unary),
    symbol!("sech", "sech", Unary),
    symbol!("csch", "csch", Unary),
    symbol!("coth", "coth", Unary),
    symbol!("exp", "exp", Unary),
    symbol!("log", "log", Unary),
    symbol!("ln", "ln", Unary),
    symbol!("det", "det", Unary),
    symbol!("gcd", "gcd", Unary),
    symbol!("lcm", "lcm", Unary),
    symbol!("abs", "abs", Unary),
    symbol!("floor", "floor", Unary),
    symbol!("ceil", "ceil", Unary),
    symbol!("norm", "norm", Unary),

    // Roots, fractions, and text
    symbol!("sqrt", "sqrt", Unary),
    symbol!("root", "root", Binary),
    symbol!("frac", "frac", Binary),
    symbol!("stackrel", "stackrel", Binary),
    symbol!("overset", "overset", Binary),
    symbol!("underset", "underset", Binary),
    symbol!("text", "text", Unary),
    symbol!("mbox", "mbox", Unary),

    // Accents
    symbol!("hat", "hat", Unary),
    symbol!("bar", "bar", Unary),
    symbol!("overline", "overline", Unary),
    symbol!("ul" | "underline", "ul", Unary),
    symbol!("vec", "vec", Unary),
    symbol!("tilde", "~", Unary),
    symbol!("dot", "dot", Unary),
    symbol!("ddot", "ddot", Unary),

    // Fonts
    symbol!("bb" | "mathbf", "bb", Unary),
    symbol!("bbb" | "mathbb", "bbb", Unary),
    symbol!("cc" | "mathcal", "cc", Unary),
    symbol!("tt" | "mathtt", "tt", Unary),
    symbol!("fr" | "mathfrak", "fr", Unary),
    symbol!("sf" | "mathsf", "sf", Unary),

    // Brackets
    symbol!("(", "(", Left),
    symbol!(")", ")", Right),
    symbol!("[", "[", Left),
    symbol!("]", "]", Right),
    symbol!("{", "{", Left),
    symbol!("}", "}", Right),
    symbol!("(:" | "langle", "⟨", Left),
    symbol!(":)" | "rangle", "⟩", Right),
    symbol!("<<", "⟨", Left),
    symbol!(">>", "⟩", Right),
    symbol!("{:", "", Left),
    symbol!(":}", "", Right),

    // Infix
    symbol!("/", "/", Infix),
    symbol!("_", "_", Infix),
    symbol!("^", "^", Infix),
];

/// Index over [`SYMBOLS`] keyed by every primary and alias spelling.
///
/// Built once, on first use, and shared read-only for the lifetime of the process.
#[derive(Debug)]
pub struct SymbolTable {
    by_spelling: HashMap<&'static str, &'static Symbol>,
    spellings: Spellings<'static>,
}

static TABLE: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::new(SYMBOLS));

impl SymbolTable {
    /// The table built from [`SYMBOLS`].
    pub fn global() -> &'static SymbolTable {
        &TABLE
    }

    /// Index the given symbols.
    ///
    /// When a spelling appears more than once, the first symbol carrying it wins.
    pub fn new(symbols: &'static [Symbol]) -> Self {
        let mut by_spelling = HashMap::with_capacity(symbols.len() * 2);
        for symbol in symbols {
            for spelling in symbol.spellings() {
                by_spelling.entry(spelling).or_insert(symbol);
            }
        }
        let spellings = Spellings::new(by_spelling.keys().copied());
        Self {
            by_spelling,
            spellings,
        }
    }

    pub fn get(&self, spelling: &str) -> Option<&'static Symbol> {
        self.by_spelling.get(spelling).copied()
    }

    pub fn spellings(&self) -> &Spellings<'static> {
        &self.spellings
    }
}
