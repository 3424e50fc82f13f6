use super::{ast::*, token::*, Column, Error, LineNumber};
use crate::mach::Program;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Operators and function calls allowed in one expression. Parsing,
/// evaluating and dropping an expression all recurse once per level.
pub const MAX_EXPRESSION_DEPTH: usize = 255;

/// Build a [`Program`] from a whole token sequence. Parsing stops at the
/// first error; nothing is recovered.
pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Program> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        let mut lines: Vec<(LineNumber, Statement)> = vec![];
        while parse.peek().is_some() {
            let line_number = match parse.line_number() {
                Ok(n) => n,
                Err(e) => return Err(e.in_column(&parse.col)),
            };
            match parse.line() {
                Ok(statement) => lines.push((line_number, statement)),
                Err(e) => return Err(e.in_line_number(line_number).in_column(&parse.col)),
            }
        }
        Ok(Program::new(lines))
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        let t = self.token_stream.next()?;
        self.col = t.col.clone();
        Some(t)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    fn got(token: Option<&Token>) -> String {
        match token {
            Some(t) => format!("GOT {}", t),
            None => "GOT END OF INPUT".to_string(),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(t) if t.kind == Kind::Number => match t.text.parse::<LineNumber>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(Overflow; format!("LINE NUMBER {}", t))),
            },
            t => Err(error!(SyntaxError; format!("EXPECTED LINE NUMBER, {}", Self::got(t)))),
        }
    }

    fn line(&mut self) -> Result<Statement> {
        let statement = self.statement()?;
        match self.next() {
            None => Ok(statement),
            Some(t) if t.kind == Kind::Newline => Ok(statement),
            t => Err(error!(SyntaxError;
                format!("EXPECTED END OF LINE AFTER STATEMENT, {}", Self::got(t)))),
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = self.next();
        let column = self.column();
        match token.map(|t| t.kind) {
            Some(Kind::Ident) => {
                let name: Rc<str> = token.map_or("", |t| t.text.as_str()).into();
                Statement::r#assign(self, column, name)
            }
            Some(Kind::Word(word)) => Statement::for_word(self, column, word),
            _ => Err(error!(SyntaxError; format!("EXPECTED STATEMENT, {}", Self::got(token)))),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let expr = self.nested_expression();
        self.depth -= 1;
        expr
    }

    fn nested_expression(&mut self) -> Result<Expression> {
        let lhs = self.operand()?;
        let op = match self.peek().map(|t| t.kind) {
            Some(Kind::Operator(op)) if op.is_arithmetic() => op,
            _ => return Ok(lhs),
        };
        self.next();
        let column = self.column();
        let rhs = self.expression()?;
        Ok(Expression::Binary(
            column,
            op.as_char(),
            Box::new(lhs),
            Box::new(rhs),
        ))
    }

    fn operand(&mut self) -> Result<Expression> {
        let token = self.next();
        let column = self.column();
        match token.map(|t| t.kind) {
            Some(Kind::Word(Word::Int)) => Ok(Expression::Int(column, Box::new(self.call()?))),
            Some(Kind::Word(Word::Rnd)) => Ok(Expression::Rnd(column, Box::new(self.call()?))),
            Some(Kind::Number) => {
                let text = token.map_or("", |t| t.text.as_str());
                Ok(Expression::Integer(column, Self::integer(text)?))
            }
            Some(Kind::Operator(Operator::Minus)) => {
                let (col, n) = self.negative(column)?;
                Ok(Expression::Integer(col, n))
            }
            Some(Kind::Ident) => {
                let name = token.map_or("", |t| t.text.as_str());
                Ok(Expression::Var(column, name.into()))
            }
            _ => Err(error!(SyntaxError;
                format!("EXPECTED EXPRESSION, {}", Self::got(token)))),
        }
    }

    /// The digits after a leading minus sign.
    fn negative(&mut self, minus: Column) -> Result<(Column, i32)> {
        match self.next() {
            Some(t) if t.kind == Kind::Number => {
                let n = Self::integer(&format!("-{}", t.text))?;
                Ok((minus.start..t.col.end, n))
            }
            t => Err(error!(SyntaxError;
                format!("EXPECTED NUMBER AFTER '-', {}", Self::got(t)))),
        }
    }

    fn integer(s: &str) -> Result<i32> {
        match s.parse::<i32>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(Overflow; format!("LITERAL {}", s))),
        }
    }

    fn literal(&mut self, what: &str) -> Result<i32> {
        let token = self.next();
        let column = self.column();
        match token.map(|t| t.kind) {
            Some(Kind::Number) => Self::integer(token.map_or("", |t| t.text.as_str())),
            Some(Kind::Operator(Operator::Minus)) => Ok(self.negative(column)?.1),
            _ => Err(error!(SyntaxError;
                format!("EXPECTED {}, {}", what, Self::got(token)))),
        }
    }

    fn call(&mut self) -> Result<Expression> {
        self.expect(Kind::LParen)?;
        let expr = self.expression()?;
        self.expect(Kind::RParen)?;
        Ok(expr)
    }

    fn expect(&mut self, kind: Kind) -> Result<()> {
        let token = self.next();
        if let Some(t) = token {
            if t.kind == kind {
                return Ok(());
            }
        }
        let expected = match kind {
            Kind::Number => "NUMBER".to_string(),
            Kind::String => "STRING".to_string(),
            Kind::Word(w) => w.to_string(),
            Kind::Ident => "IDENTIFIER".to_string(),
            Kind::Operator(op) => format!("'{}'", op),
            Kind::LParen => "'('".to_string(),
            Kind::RParen => "')'".to_string(),
            Kind::Newline => "END OF LINE".to_string(),
        };
        Err(error!(SyntaxError;
            format!("EXPECTED {}, {}", expected, Self::got(token))))
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, column: Column, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Color => Self::r#color(parse, column),
            Goto => Self::r#goto(parse, column),
            Print => Self::r#print(parse, column),
            Pset => Self::r#pset(parse, column),
            Screen => Self::r#screen(parse, column),
            Int | Rnd => Err(error!(SyntaxError; format!("EXPECTED STATEMENT, GOT {}", word))),
        }
    }

    fn r#assign(parse: &mut Parser, column: Column, name: Rc<str>) -> Result<Statement> {
        parse.expect(Kind::Operator(Operator::Equal))?;
        Ok(Statement::Assign(column, name, parse.expression()?))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        match parse.peek().map(|t| t.kind) {
            None | Some(Kind::Newline) => Ok(Statement::Print(column, None)),
            Some(Kind::String) => {
                let token = parse.next();
                let s: Rc<str> = token.map_or("", |t| t.content()).into();
                let expr = Expression::String(parse.column(), s);
                Ok(Statement::Print(column, Some(expr)))
            }
            Some(_) => Ok(Statement::Print(column, Some(parse.expression()?))),
        }
    }

    fn r#screen(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Screen(column, parse.literal("SCREEN MODE")?))
    }

    fn r#pset(parse: &mut Parser, column: Column) -> Result<Statement> {
        parse.expect(Kind::LParen)?;
        let x = parse.expression()?;
        parse.expect(Kind::Operator(Operator::Comma))?;
        let y = parse.expression()?;
        parse.expect(Kind::RParen)?;
        let color = match parse.peek() {
            Some(t) if t.is_operator(Operator::Comma) => {
                parse.next();
                Some(parse.expression()?)
            }
            _ => None,
        };
        Ok(Statement::Pset(column, x, y, color))
    }

    fn r#color(parse: &mut Parser, column: Column) -> Result<Statement> {
        let fg = parse.expression()?;
        parse.expect(Kind::Operator(Operator::Comma))?;
        let bg = parse.expression()?;
        parse.expect(Kind::Operator(Operator::Comma))?;
        let border = parse.expression()?;
        Ok(Statement::Color(column, fg, bg, border))
    }
}
