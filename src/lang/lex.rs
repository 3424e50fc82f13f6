use super::{token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Convert a whole program into tokens. Spaces are dropped; every other
/// character ends up inside exactly one token, so the tokens plus the
/// skipped spaces reproduce the source.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer {
        source: s,
        chars: s.char_indices().peekable(),
    }
    .collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' '
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

type Chars<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut Chars<'a>;
    fn source(&self) -> &'a str;

    fn offset(&mut self) -> usize {
        let len = self.source().len();
        self.chars().peek().map_or(len, |(i, _)| *i)
    }

    fn token(&mut self, kind: Kind, start: usize) -> Token {
        let end = self.offset();
        Token::new(kind, &self.source()[start..end], start..end)
    }

    fn whitespace(&mut self) {
        while let Some((_, pk)) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn newline(&mut self, start: usize) -> Result<Token> {
        if let Some((_, '\r')) = self.chars().next() {
            match self.chars().next() {
                Some((_, '\n')) => {}
                _ => return Err(error!(UnrecognizedCharacter, ..&(start..start + 1); "'\\r'")),
            }
        }
        Ok(self.token(Kind::Newline, start))
    }

    fn number(&mut self, start: usize) -> Token {
        while let Some((_, pk)) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            self.chars().next();
        }
        self.token(Kind::Number, start)
    }

    fn string(&mut self, start: usize) -> Result<Token> {
        self.chars().next();
        loop {
            match self.chars().next() {
                Some((_, '"')) => return Ok(self.token(Kind::String, start)),
                Some(_) => continue,
                None => {
                    let col: Column = start..self.source().len();
                    return Err(error!(UnterminatedString, ..&col));
                }
            }
        }
    }

    fn alphabetic(&mut self, start: usize) -> Token {
        self.chars().next();
        while let Some((_, pk)) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) {
                break;
            }
            self.chars().next();
        }
        let end = self.offset();
        match Word::from_string(&self.source()[start..end]) {
            Some(word) => self.token(Kind::Word(word), start),
            None => self.token(Kind::Ident, start),
        }
    }

    fn minutia(&mut self, start: usize, ch: char) -> Result<Token> {
        self.chars().next();
        let kind = match ch {
            '(' => Kind::LParen,
            ')' => Kind::RParen,
            _ => match Operator::from_char(ch) {
                Some(op) => Kind::Operator(op),
                None => {
                    let col = start..self.offset();
                    return Err(error!(UnrecognizedCharacter, ..&col; format!("{:?}", ch)));
                }
            },
        };
        Ok(self.token(kind, start))
    }
}

struct BasicLexer<'a> {
    source: &'a str,
    chars: Chars<'a>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut Chars<'a> {
        &mut self.chars
    }
    fn source(&self) -> &'a str {
        self.source
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, pk) = self.chars.peek()?;
        if is_basic_whitespace(*pk) {
            self.whitespace();
        }
        let (start, pk) = *self.chars.peek()?;
        if pk == '\n' || pk == '\r' {
            return Some(self.newline(start));
        }
        if is_basic_digit(pk) {
            return Some(Ok(self.number(start)));
        }
        if pk == '"' {
            return Some(self.string(start));
        }
        if is_basic_alphabetic(pk) {
            return Some(Ok(self.alphabetic(start)));
        }
        Some(self.minutia(start, pk))
    }
}
