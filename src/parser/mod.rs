//! Parser module for building the syntax tree.
//!
//! This module contains the parser that pulls tokens from a lexer and builds
//! a `Program`. It uses a Pratt parser for expressions with proper operator
//! precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and binary operators, grouping, `if`)
//! - Error collection and recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
