//! on-netlist: text netlist front end for ohmnet.
//!
//! A netlist is line oriented. Blank lines and lines starting with `#` are
//! ignored; every other line declares one symbol:
//!
//! ```text
//! # name   value  terminal terminal
//! R1       2.2k   IN       J1
//! R2       1k     J1       OUT
//! J1       R3
//! R3       470    J1       OUT
//! IN
//! OUT
//! ```
//!
//! `R…` declares a resistor, `J…` a junction and `IN` / `OUT` the two port
//! junctions. Forward references are allowed. Junction lists need not repeat
//! connections a resistor already declares.

pub mod error;
pub mod lexer;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use lexer::{TokenLine, tokenize};
pub use loader::{load_file, load_str};
