//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! its lexer through a two-token window (`current`/`peek`) and uses a Pratt
//! parser with NUD/LED handlers for expressions and a statement lookup for
//! the keywords that start statements.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors are collected, never returned early: `parse_program` always
//! produces a `Program` and the caller inspects `errors()` afterwards.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, owned exclusively
    lexer: Lexer,
    /// Token under the cursor
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Every error recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser, priming the lookahead window and registering
    /// every handler.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from; the parser takes ownership
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails to parse is skipped, its error is recorded and
    /// parsing resumes from wherever the cursor stopped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                trace!(statement = %stmt, "parsed statement");
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    /// Errors recorded during parsing, in the order they occurred.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window by one token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only when the peek token has the expected kind.
    ///
    /// # Returns
    ///
    /// `true` if the window moved, otherwise records an `UnexpectedPeek`
    /// error and returns `false`.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.push_error(ErrorImpl::UnexpectedPeek {
                expected,
                found: self.peek.kind,
            });
            false
        }
    }

    pub fn push_error(&mut self, error: ErrorImpl) {
        debug!(error = %error, current = %self.current, "recorded parse error");
        self.errors.push(Error::new(error));
    }

    /// Binding power of the peek token, `Lowest` when it is not an operator.
    pub fn peek_precedence(&self) -> BindingPower {
        self.precedence_of(self.peek.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a whole source string.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, so callers can inspect `errors()`
/// - The parsed Program, possibly missing statements that failed to parse
pub fn parse(source: impl Into<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
