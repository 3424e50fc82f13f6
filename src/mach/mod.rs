/*!
## Rust Machine Module

This Rust module runs a parsed BASIC program by walking its syntax tree.

*/

mod command;
mod function;
mod operation;
mod program;
mod runtime;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use function::Function;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
