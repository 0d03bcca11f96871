use crate::syntax::Syntax;

pub static C: Syntax = Syntax {
    name: "c",
    filematch: &[".c", ".h", ".cpp"],
    keywords: &[
        "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
        "typedef", "static", "enum", "class", "case",
        "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|",
    ],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    numbers: true,
    strings: true,
};
