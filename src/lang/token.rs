use super::Column;

/// A lexed token: its kind plus the exact source text it spans.
/// `col` is the byte range in the program source.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub col: Column,
}

impl Token {
    pub fn new(kind: Kind, text: &str, col: Column) -> Token {
        Token {
            kind,
            text: text.to_string(),
            col,
        }
    }

    /// The text a parser cares about. For strings this excludes the quotes.
    pub fn content(&self) -> &str {
        match self.kind {
            Kind::String => self
                .text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(&self.text),
            _ => &self.text,
        }
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        self.kind == Kind::Operator(op)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Newline => write!(f, "END OF LINE"),
            _ => write!(f, "{}", self.text),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Number,
    String,
    Word(Word),
    Ident,
    Operator(Operator),
    LParen,
    RParen,
    Newline,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Color,
    Goto,
    Int,
    Print,
    Pset,
    Rnd,
    Screen,
}

impl Word {
    const ALL: [Word; 7] = [
        Word::Color,
        Word::Goto,
        Word::Int,
        Word::Print,
        Word::Pset,
        Word::Rnd,
        Word::Screen,
    ];

    /// Case-insensitive lookup of a whole identifier-shaped run.
    pub fn from_string(s: &str) -> Option<Word> {
        Word::ALL
            .iter()
            .copied()
            .find(|w| w.to_string().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Color => write!(f, "COLOR"),
            Goto => write!(f, "GOTO"),
            Int => write!(f, "INT"),
            Print => write!(f, "PRINT"),
            Pset => write!(f, "PSET"),
            Rnd => write!(f, "RND"),
            Screen => write!(f, "SCREEN"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Equal,
    Comma,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '=' => Some(Equal),
            ',' => Some(Comma),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        use Operator::*;
        match self {
            Equal => '=',
            Comma => ',',
            Plus => '+',
            Minus => '-',
            Multiply => '*',
            Divide => '/',
        }
    }

    /// Operators that may continue an expression.
    pub fn is_arithmetic(self) -> bool {
        use Operator::*;
        match self {
            Plus | Minus | Multiply | Divide => true,
            Equal | Comma => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_from_str() {
        assert_eq!(Word::from_string("print"), Some(Word::Print));
        assert_eq!(Word::from_string("PsEt"), Some(Word::Pset));
        assert_eq!(Word::from_string("PRINTER"), None);
        assert_eq!(Word::from_string("PICKLES"), None);
    }

    #[test]
    fn test_string_content() {
        let t = Token::new(Kind::String, "\"HI THERE\"", 3..13);
        assert_eq!(t.content(), "HI THERE");
        assert_eq!(t.to_string(), "\"HI THERE\"");
    }
}
