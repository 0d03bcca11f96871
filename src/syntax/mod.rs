mod c;
mod rust;

use crate::hl::Hl;

/// Keywords ending in this marker are highlighted as types.
const TYPE_MARKER: char = '|';

pub struct Syntax {
    pub name: &'static str,
    pub filematch: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    pub numbers: bool,
    pub strings: bool,
}

static SYNTAXES: &[&Syntax] = &[&c::C, &rust::RUST];

impl Syntax {
    /// Patterns starting with `.` match the extension, anything else matches
    /// as a substring of the file name.
    pub fn detect(filename: Option<&str>) -> Option<&'static Syntax> {
        let filename = filename?;
        let ext = filename.rfind('.').map(|i| &filename[i..]);

        SYNTAXES.iter().copied().find(|syntax| {
            syntax.filematch.iter().any(|pattern| {
                if pattern.starts_with('.') {
                    ext == Some(*pattern)
                } else {
                    filename.contains(pattern)
                }
            })
        })
    }

    /// Classifies `render` into `hl` and returns whether a block comment is
    /// still open at the end of the row.
    pub fn highlight(&self, render: &[u8], in_comment: bool, hl: &mut Vec<Hl>) -> bool {
        hl.clear();
        hl.resize(render.len(), Hl::Normal);

        let scs = self.line_comment.as_bytes();
        let mcs = self.block_comment.0.as_bytes();
        let mce = self.block_comment.1.as_bytes();

        let mut prev_sep = true;
        let mut in_string: Option<u8> = None;
        let mut in_comment = in_comment;
        let mut i = 0;

        while i < render.len() {
            let ch = render[i];
            let prev_hl = if i > 0 { hl[i - 1] } else { Hl::Normal };
            let rest = &render[i..];

            if !scs.is_empty() && in_string.is_none() && !in_comment && rest.starts_with(scs) {
                hl[i..].fill(Hl::Comment);
                break;
            }

            if !mcs.is_empty() && !mce.is_empty() && in_string.is_none() {
                if in_comment {
                    hl[i] = Hl::BlockComment;
                    if rest.starts_with(mce) {
                        hl[i..i + mce.len()].fill(Hl::Comment);
                        i += mce.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        i += 1;
                    }
                    continue;
                } else if rest.starts_with(mcs) {
                    hl[i..i + mcs.len()].fill(Hl::Comment);
                    i += mcs.len();
                    in_comment = true;
                    continue;
                }
            }

            if self.strings {
                if let Some(quote) = in_string {
                    hl[i] = Hl::String;
                    if ch == b'\\' && i + 1 < render.len() {
                        hl[i + 1] = Hl::String;
                        i += 2;
                        continue;
                    }
                    if ch == quote {
                        in_string = None;
                    }
                    i += 1;
                    prev_sep = true;
                    continue;
                } else if ch == b'"' || ch == b'\'' {
                    in_string = Some(ch);
                    hl[i] = Hl::String;
                    i += 1;
                    continue;
                }
            }

            if self.numbers
                && ((ch.is_ascii_digit() && (prev_sep || prev_hl == Hl::Number))
                    || (ch == b'.' && prev_hl == Hl::Number))
            {
                hl[i] = Hl::Number;
                i += 1;
                prev_sep = false;
                continue;
            }

            if prev_sep {
                if let Some((len, kind)) = self.match_keyword(rest) {
                    hl[i..i + len].fill(kind);
                    i += len;
                    prev_sep = false;
                    continue;
                }
            }

            prev_sep = is_separator(ch);
            i += 1;
        }

        in_comment
    }

    fn match_keyword(&self, text: &[u8]) -> Option<(usize, Hl)> {
        self.keywords.iter().find_map(|keyword| {
            let (word, kind) = match keyword.strip_suffix(TYPE_MARKER) {
                Some(word) => (word, Hl::Type),
                None => (*keyword, Hl::Keyword),
            };
            let len = word.len();
            let next = text.get(len).copied().unwrap_or(b'\0');

            (text.starts_with(word.as_bytes()) && is_separator(next)).then_some((len, kind))
        })
    }
}

fn is_separator(ch: u8) -> bool {
    ch.is_ascii_whitespace() || ch == 0x0b || ch == b'\0' || b",.()+-/*=~%<>[];".contains(&ch)
}
