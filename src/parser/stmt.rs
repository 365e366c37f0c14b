use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }
    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    skip_semicolon(parser);

    Some(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    skip_semicolon(parser);

    Some(Statement::Return(ReturnStatement { token, value }))
}

/// An expression that fails to parse produces no statement; its error is already recorded.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest);
    skip_semicolon(parser);

    Some(Statement::Expression(ExpressionStatement {
        token,
        expression: expression?,
    }))
}

/// Parses statements up to the closing `}` (or EOF), leaving the cursor on it.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::RBrace) && !parser.current_token_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    BlockStatement { token, statements }
}

// Trailing semicolons are optional, e.g. at end of input or before `}`
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
