use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, Identifier, IfExpression, InfixExpression, IntegerLiteral,
            PrefixExpression,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    MK_PREFIX,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        parser.push_error(ErrorImpl::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = nud(parser)?;

    // Keep folding while the next operator binds tighter than the caller's
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Some(left);
        };

        let operator_bp = parser.peek_precedence();
        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(ErrorImpl::IntegerParseError {
                literal: token.literal,
            });
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Boolean(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(MK_PREFIX!(operator_token, right))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::RParen) || !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let mut alternative = None;
    if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }
        alternative = Some(parse_block_stmt(parser));
    }

    Some(Expression::If(IfExpression {
        token,
        condition: Box::new(condition?),
        consequence,
        alternative,
    }))
}
