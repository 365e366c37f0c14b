//! Unit tests for the syntax tree rendering.
//!
//! Nodes are built by hand here so rendering is checked independently of the parser.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expression, Node, Program, Statement},
    expressions::{
        BooleanLiteral, Identifier, IfExpression, InfixExpression, IntegerLiteral,
        PrefixExpression,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

fn ident(name: &str) -> Identifier {
    Identifier::new(Token::new(TokenKind::Ident, name))
}

fn ident_expr(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

fn int_expr(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement {
        token: Token::new(TokenKind::Ident, expression.token_literal()),
        expression,
    })
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement {
        token: Token::new(TokenKind::LBrace, "{"),
        statements,
    }
}

#[test]
fn test_let_statement_string() {
    let program = Program::new(vec![Statement::Let(LetStatement {
        token: Token::new(TokenKind::Let, "let"),
        name: ident("myVar"),
        value: Some(ident_expr("anotherVar")),
    })]);

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_let_statement_without_value() {
    let stmt = LetStatement {
        token: Token::new(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
    };

    assert_eq!(stmt.to_string(), "let x = ;");
}

#[test]
fn test_return_statement_string() {
    let stmt = ReturnStatement {
        token: Token::new(TokenKind::Return, "return"),
        value: Some(int_expr(5)),
    };

    assert_eq!(stmt.to_string(), "return 5;");
    assert_eq!(stmt.token_literal(), "return");

    let bare = ReturnStatement {
        token: Token::new(TokenKind::Return, "return"),
        value: None,
    };
    assert_eq!(bare.to_string(), "return;");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
    assert!(program.is_empty());
}

#[test]
fn test_expression_statement_string() {
    let stmt = ExpressionStatement {
        token: Token::new(TokenKind::Ident, "foobar"),
        expression: ident_expr("foobar"),
    };

    assert_eq!(stmt.to_string(), "foobar");
    assert_eq!(stmt.token_literal(), "foobar");
}

#[test]
fn test_prefix_and_infix_string() {
    let negated = Expression::Prefix(PrefixExpression {
        token: Token::new(TokenKind::Minus, "-"),
        operator: "-".to_string(),
        right: Box::new(ident_expr("a")),
    });
    let product = Expression::Infix(InfixExpression {
        token: Token::new(TokenKind::Asterisk, "*"),
        left: Box::new(negated),
        operator: "*".to_string(),
        right: Box::new(ident_expr("b")),
    });

    assert_eq!(product.to_string(), "((-a) * b)");
    assert_eq!(product.token_literal(), "*");
}

#[test]
fn test_boolean_string() {
    let literal = BooleanLiteral {
        token: Token::new(TokenKind::False, "false"),
        value: false,
    };

    assert_eq!(literal.to_string(), "false");
}

#[test]
fn test_if_expression_string() {
    let condition = Expression::Infix(InfixExpression {
        token: Token::new(TokenKind::Lt, "<"),
        left: Box::new(ident_expr("x")),
        operator: "<".to_string(),
        right: Box::new(ident_expr("y")),
    });
    let mut expression = IfExpression {
        token: Token::new(TokenKind::If, "if"),
        condition: Box::new(condition),
        consequence: block(vec![expr_stmt(ident_expr("x"))]),
        alternative: None,
    };

    assert_eq!(expression.to_string(), "if(x < y) x");

    expression.alternative = Some(block(vec![expr_stmt(ident_expr("y"))]));
    assert_eq!(expression.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_block_concatenates_without_separator() {
    let body = block(vec![expr_stmt(ident_expr("a")), expr_stmt(int_expr(1))]);

    assert_eq!(body.to_string(), "a1");
    assert_eq!(body.statements.len(), 2);
    assert_eq!(body.token_literal(), "{");
}
