use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // highest level, no operator mapped to it
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.led(TokenKind::Eq, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEq, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::Lt, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Gt, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Minus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Asterisk, BindingPower::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_identifier);
    parser.nud(TokenKind::Int, parse_integer_literal);
    parser.nud(TokenKind::True, parse_boolean);
    parser.nud(TokenKind::False, parse_boolean);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
