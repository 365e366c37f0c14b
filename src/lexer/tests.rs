//! Unit tests for the lexer module.
//!
//! Covers delimiters, operators, keywords, identifiers, integer literals,
//! illegal characters and the repeating EOF state.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, Token, TokenKind},
};

#[test]
fn test_next_token_delimiters() {
    let mut lexer = Lexer::new("=+(){},;");
    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::new(TokenKind::EOF, ""));
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens, vec![Token::new(TokenKind::EOF, "")]);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("!-/*5; 5 < 10 > 5;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::Lt,
            TokenKind::Int,
            TokenKind::Gt,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("10 == 10; 10 != 9; a = !b");

    assert_eq!(tokens[1], Token::new(TokenKind::Eq, "=="));
    assert_eq!(tokens[5], Token::new(TokenKind::NotEq, "!="));
    assert_eq!(tokens[9], Token::new(TokenKind::Assign, "="));
    assert_eq!(tokens[10], Token::new(TokenKind::Bang, "!"));
    assert_eq!(tokens[11], Token::new(TokenKind::Ident, "b"));
}

#[test]
fn test_operator_at_end_of_input() {
    let tokens = tokenize("x =");

    assert_eq!(tokens[1], Token::new(TokenKind::Assign, "="));
    assert_eq!(tokens[2].kind, TokenKind::EOF);

    let tokens = tokenize("!");
    assert_eq!(tokens[0], Token::new(TokenKind::Bang, "!"));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[0].literal, "fn");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _under letx");

    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "foo"));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "bar_baz"));
    assert_eq!(tokens[2], Token::new(TokenKind::Ident, "_under"));
    assert_eq!(tokens[3], Token::new(TokenKind::Ident, "letx"));
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "abc"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "123"));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 007 -3");

    assert_eq!(tokens[0], Token::new(TokenKind::Int, "5"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "10"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "007"));
    assert_eq!(tokens[3], Token::new(TokenKind::Minus, "-"));
    assert_eq!(tokens[4], Token::new(TokenKind::Int, "3"));
}

#[test]
fn test_tokenize_illegal() {
    let tokens = tokenize("let x = @; é");

    assert_eq!(tokens[3], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5], Token::new(TokenKind::Illegal, "é"));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize(" \tlet\r\n  five =\n5 ;\n");

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "five"));
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3], Token::new(TokenKind::Int, "5"));
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_program() {
    let source = "let add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, ten);";
    let tokens = tokenize(source);
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
    assert_eq!(lookup_ident("returns"), TokenKind::Ident);
    assert_eq!(lookup_ident("Let"), TokenKind::Ident);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
    assert_eq!(Token::new(TokenKind::Int, "5").to_string(), "INT(\"5\")");
}
