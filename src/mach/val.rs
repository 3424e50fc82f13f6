use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// ## Runtime values
///
/// `Nil` is never produced by a well-formed program. It exists so that
/// every consumer has to decide what an unset value means, and they all
/// decide it is a type mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Nil,
    Integer(i32),
    Real(f32),
    String(Rc<str>),
}

impl Default for Val {
    fn default() -> Self {
        Val::Nil
    }
}

impl Val {
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Nil => "NIL",
            Val::Integer(_) => "INTEGER",
            Val::Real(_) => "REAL",
            Val::String(_) => "STRING",
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Nil => write!(f, "NIL"),
            Integer(n) => write!(f, "{}", n),
            Real(n) => write!(f, "{}", n),
            String(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;

    /// Strict: only an `Integer` converts. Use `INT()` to truncate reals.
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            _ => Err(error!(TypeMismatch; format!("EXPECTED INTEGER, GOT {}", val.type_name()))),
        }
    }
}
