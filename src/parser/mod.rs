//! PLC source code parser
//!
//! This module transforms PLC source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with the rules in `statements` and
//!   `expressions`
//! - [`ast`]: AST node definitions
//! - [`numeral`]: arbitrary-precision numeric literal values
//!
//! # Language
//!
//! - Statements: `LET name : TYPE [= expr];`, `name = expr;`, `expr;`,
//!   `IF cond THEN ... [ELSE ...] END`, `WHILE cond DO ... END`
//! - Expressions: integer, decimal, string and `TRUE`/`FALSE` literals,
//!   variables, calls `f(a, b)`, grouping, and `== != + - * /`
//! - No comments, no escapes in strings, no unary operators
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one function per grammar tier.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod numeral;
pub mod parse;
mod statements;

pub use lexer::{lex, LexError, LexErrorKind, Token, TokenType};
pub use parse::{parse, ParseError, ParseErrorKind, Parser};
