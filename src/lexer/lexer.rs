use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENT_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a single source string.
///
/// Every call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted it keeps returning `EOF` with an empty literal.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of `ch` inside `source`
    pos: usize,
    /// Character under the cursor, `None` at end of input
    ch: Option<char>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let source = source.into();
        let ch = source.chars().next();

        Lexer { source, pos: 0, ch }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, ""),
        };

        let token = match ch {
            '=' => self.one_or_two('=', TokenKind::Assign, TokenKind::Eq),
            '!' => self.one_or_two('!', TokenKind::Bang, TokenKind::NotEq),
            '+' => MK_TOKEN!(TokenKind::Plus, "+"),
            '-' => MK_TOKEN!(TokenKind::Minus, "-"),
            '*' => MK_TOKEN!(TokenKind::Asterisk, "*"),
            '/' => MK_TOKEN!(TokenKind::Slash, "/"),
            '<' => MK_TOKEN!(TokenKind::Lt, "<"),
            '>' => MK_TOKEN!(TokenKind::Gt, ">"),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            ',' => MK_TOKEN!(TokenKind::Comma, ","),
            '(' => MK_TOKEN!(TokenKind::LParen, "("),
            ')' => MK_TOKEN!(TokenKind::RParen, ")"),
            '{' => MK_TOKEN!(TokenKind::LBrace, "{"),
            '}' => MK_TOKEN!(TokenKind::RBrace, "}"),
            c if is_letter(c) => {
                // Runs return straight away, the cursor already sits past them
                let literal = self.read_run(&IDENT_PATTERN);
                return MK_TOKEN!(lookup_ident(&literal), literal);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_run(&NUMBER_PATTERN);
                return MK_TOKEN!(TokenKind::Int, literal);
            }
            c => {
                trace!(character = %c, offset = self.pos, "illegal character");
                MK_TOKEN!(TokenKind::Illegal, c.to_string())
            }
        };

        self.read_char();
        token
    }

    /// Handles `=`/`==` and `!`/`!=`, leaving the cursor on the last consumed character.
    fn one_or_two(&mut self, first: char, single: TokenKind, double: TokenKind) -> Token {
        if self.peek_char() == Some('=') {
            self.read_char();
            let mut literal = String::from(first);
            literal.push('=');
            MK_TOKEN!(double, literal)
        } else {
            MK_TOKEN!(single, first.to_string())
        }
    }

    fn read_char(&mut self) {
        if let Some(ch) = self.ch {
            self.pos += ch.len_utf8();
        }
        self.ch = self.source[self.pos..].chars().next();
    }

    fn peek_char(&self) -> Option<char> {
        let ch = self.ch?;
        self.source[self.pos + ch.len_utf8()..].chars().next()
    }

    fn read_run(&mut self, pattern: &Regex) -> String {
        let len = pattern
            .find(&self.source[self.pos..])
            .map(|found| found.end())
            .unwrap_or(0);
        let literal = self.source[self.pos..self.pos + len].to_string();

        self.pos += len;
        self.ch = self.source[self.pos..].chars().next();
        literal
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scans the whole source, returning every token up to and including the first `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
