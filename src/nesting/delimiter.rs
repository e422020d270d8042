#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Delimiter {
    Bracket,
    Brace,
    Paren,
}

impl Delimiter {
    /// Marker pushed onto the nesting stack for this delimiter.
    #[rustfmt::skip]
    pub fn to_marker(self) -> i64 {
        use Delimiter::*;

        match self {
            Bracket => 1,
            Brace   => 2,
            Paren   => 3,
        }
    }

    pub fn from_marker(marker: i64) -> Option<Self> {
        use Delimiter::*;

        match marker {
            1 => Some(Bracket),
            2 => Some(Brace),
            3 => Some(Paren),

            _ => {
                log::warn!("Encountered an unrecognised delimiter marker: {}", marker);
                None
            }
        }
    }

    #[rustfmt::skip]
    pub fn from_open(c: char) -> Option<Self> {
        use Delimiter::*;

        match c {
            '[' => Some(Bracket),
            '{' => Some(Brace),
            '(' => Some(Paren),
            _   => None,
        }
    }

    #[rustfmt::skip]
    pub fn from_close(c: char) -> Option<Self> {
        use Delimiter::*;

        match c {
            ']' => Some(Bracket),
            '}' => Some(Brace),
            ')' => Some(Paren),
            _   => None,
        }
    }

    #[rustfmt::skip]
    pub fn open(self) -> char {
        use Delimiter::*;

        match self {
            Bracket => '[',
            Brace   => '{',
            Paren   => '(',
        }
    }

    #[rustfmt::skip]
    pub fn close(self) -> char {
        use Delimiter::*;

        match self {
            Bracket => ']',
            Brace   => '}',
            Paren   => ')',
        }
    }
}
