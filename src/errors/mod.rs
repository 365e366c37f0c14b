//! Error types for the parser.
//!
//! This module defines the syntax errors the parser collects while it keeps
//! going. It includes:
//!
//! - The `Error` wrapper handed out by `Parser::errors()`
//! - The `ErrorImpl` variants with their diagnostic messages
//! - Optional suggestions shown next to a message

pub mod errors;
