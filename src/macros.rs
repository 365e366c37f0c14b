//! Utility macros for the lexer and parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PREFIX!` - Builds a prefix operator expression from a token and its operand

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - Anything convertible into the token's literal `String`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: String::from($literal),
        }
    };
}

/// Builds `Expression::Prefix` from the operator token and an already parsed operand.
///
/// # Example
///
/// ```ignore
/// let negated = MK_PREFIX!(operator_token, right);
/// ```
#[macro_export]
macro_rules! MK_PREFIX {
    ($token:expr, $right:expr) => {{
        let token = $token;
        Expression::Prefix(PrefixExpression {
            operator: token.literal.clone(),
            token,
            right: Box::new($right),
        })
    }};
}
