//! # Introduction
//!
//! `plc` compiles programs written in PLC, a small imperative teaching
//! language, into Java source.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Generator → Java
//! ```
//!
//! 1. [`lex()`]: splits the source into [`parser::Token`]s.
//! 2. [`parse()`]: recursive descent over the tokens, producing a
//!    [`parser::ast::Source`].
//! 3. [`codegen`]: prints the AST as a `Main` class whose `main` method holds
//!    the program's statements.
//!
//! Each stage runs to completion before the next starts, and the first error
//! aborts the whole compilation.
//!
//! ## Example
//!
//! ```
//! let java = plc::compile("LET i : INTEGER = 2;").unwrap();
//! assert!(java.contains("        INTEGER i = 2;\n"));
//! ```

pub mod codegen;
pub mod error;
pub mod parser;

pub use codegen::{generate, generate_expression, generate_statement};
pub use error::CompileError;
pub use parser::{lex, parse};

use log::debug;

/// Lex, parse and generate `source` in one call.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = lex(source)?;
    debug!("lexing finished with {} tokens", tokens.len());
    let ast = parse(&tokens)?;
    debug!("parsing finished with {} statements", ast.statements.len());
    Ok(generate(&ast))
}
