/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

A whole program is lexed in one pass, then parsed one numbered line at a
time into a [`Program`](crate::mach::Program) of statements kept in file order.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::{parse, MAX_EXPRESSION_DEPTH};

/// Byte range of a token within the program source.
pub type Column = std::ops::Range<usize>;

/// Declared line number; only meaningful as a `GOTO` target.
pub type LineNumber = u32;
