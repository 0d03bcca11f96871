use crate::syntax::Syntax;

pub static RUST: Syntax = Syntax {
    name: "rust",
    filematch: &[".rs"],
    keywords: &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "fn", "for", "if",
        "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
        "self", "Self", "static", "struct", "super", "trait", "type", "unsafe", "use", "where",
        "while",
        "bool|", "char|", "str|", "u8|", "u16|", "u32|", "u64|", "usize|", "i8|", "i16|",
        "i32|", "i64|", "isize|", "f32|", "f64|",
    ],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    numbers: true,
    strings: false,
};
