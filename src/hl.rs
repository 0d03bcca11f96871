/// Classification of one rendered byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hl {
    Normal,
    Comment,
    BlockComment,
    Keyword,
    Type,
    String,
    Number,
    Match,
}

impl Hl {
    pub fn color(self) -> &'static [u8] {
        match self {
            Hl::Normal => fg_color16!(default),
            Hl::Comment | Hl::BlockComment => fg_color16!(cyan),
            Hl::Keyword => fg_color16!(yellow),
            Hl::Type => fg_color16!(green),
            Hl::String => fg_color16!(magenta),
            Hl::Number => fg_color16!(red),
            Hl::Match => fg_color16!(blue),
        }
    }
}
