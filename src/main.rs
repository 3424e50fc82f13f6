//! # BASIC
//!
//! Runs line-numbered BASIC programs from files.
//!

mod term;

fn main() {
    std::process::exit(term::main());
}
