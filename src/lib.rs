//! # Line BASIC
//!
//! A very small BASIC. Every line starts with a line number and holds
//! exactly one statement.
//!
//! ```text
//! 10 SCREEN 1
//! 20 X = INT(RND(320))
//! 30 Y = INT(RND(200))
//! 40 PSET (X, Y), 15
//! 50 GOTO 20
//! ```
//!
//! The language has assignment, `+` and `*` on integers and reals,
//! `PRINT`, `GOTO`, the `INT` and `RND` functions, and the graphics
//! statements `SCREEN`, `PSET` and `COLOR`. Graphics are not drawn here;
//! they are reported to the caller as [`mach::Command`] values.
//!
//! ```
//! use basic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.load("10 X=2+3\n20 PRINT X\n").unwrap();
//! assert_eq!(runtime.execute(100), Event::Print("5".to_string()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

pub mod lang;
pub mod mach;
