use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recoverable syntax error recorded by the parser.
///
/// `Display` renders the diagnostic message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::UnexpectedPeek { .. } => "UnexpectedPeek",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::RParen,
                ..
            } => ErrorTip::Suggestion(String::from("did you forget a closing `)`?")),
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::LBrace,
                ..
            } => ErrorTip::Suggestion(String::from("bodies must be wrapped in `{ }`")),
            ErrorImpl::UnexpectedPeek { .. } => ErrorTip::None,
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedPeek { expected: TokenKind, found: TokenKind },
    #[error("could not parse {literal} as an integer")]
    IntegerParseError { literal: String },
}
