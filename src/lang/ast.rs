use super::{Column, LineNumber};
use std::rc::Rc;

/// One statement per numbered line.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Assign(Column, Rc<str>, Expression),
    Color(Column, Expression, Expression, Expression),
    Goto(Column, LineNumber),
    /// `None` prints a blank line.
    Print(Column, Option<Expression>),
    Pset(Column, Expression, Expression, Option<Expression>),
    Screen(Column, i32),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(Column, i32),
    String(Column, Rc<str>),
    Var(Column, Rc<str>),
    /// Operator character, left, right.
    Binary(Column, char, Box<Expression>, Box<Expression>),
    Int(Column, Box<Expression>),
    Rnd(Column, Box<Expression>),
}

impl Statement {
    pub fn column(&self) -> &Column {
        use Statement::*;
        match self {
            Assign(col, ..) | Color(col, ..) | Goto(col, ..) | Print(col, ..) | Pset(col, ..)
            | Screen(col, ..) => col,
        }
    }
}

impl Expression {
    pub fn column(&self) -> &Column {
        use Expression::*;
        match self {
            Integer(col, ..) | String(col, ..) | Var(col, ..) | Binary(col, ..) | Int(col, ..)
            | Rnd(col, ..) => col,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Assign(_, var, expr) => write!(f, "{}={}", var, expr),
            Color(_, fg, bg, border) => write!(f, "COLOR {},{},{}", fg, bg, border),
            Goto(_, line) => write!(f, "GOTO {}", line),
            Print(_, None) => write!(f, "PRINT"),
            Print(_, Some(expr)) => write!(f, "PRINT {}", expr),
            Pset(_, x, y, None) => write!(f, "PSET ({},{})", x, y),
            Pset(_, x, y, Some(color)) => write!(f, "PSET ({},{}),{}", x, y, color),
            Screen(_, mode) => write!(f, "SCREEN {}", mode),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(_, n) => write!(f, "{}", n),
            String(_, s) => write!(f, "\"{}\"", s),
            Var(_, name) => write!(f, "{}", name),
            Binary(_, op, lhs, rhs) => write!(f, "{}{}{}", lhs, op, rhs),
            Int(_, expr) => write!(f, "INT({})", expr),
            Rnd(_, expr) => write!(f, "RND({})", expr),
        }
    }
}
