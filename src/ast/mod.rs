/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree produced by the parser
///
/// Submodules:
/// - ast: The `Node` trait, the `Statement`/`Expression` sum types and `Program`
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
