//! Line oriented read-parse-print loop.
//!
//! Every line is lexed and parsed on its own, then either the parser errors
//! or the parenthesized rendering of the program is written back.

pub mod repl;
