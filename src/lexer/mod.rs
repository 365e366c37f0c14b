//! Lexical analysis module.
//!
//! This module contains the pull-based lexer that turns source text into
//! tokens on demand, and the token classifier that separates keywords from
//! identifiers. It handles:
//!
//! - Single and two character operators (`=`, `==`, `!`, `!=`, ...)
//! - Identifiers and keywords
//! - Base-10 integer literals
//! - Whitespace skipping and `ILLEGAL` characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
