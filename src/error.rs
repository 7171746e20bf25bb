//! Pipeline-level error type
//!
//! [`CompileError`] wraps the error of whichever stage stopped the
//! compilation. Code generation cannot fail, so only the lexer and parser
//! contribute variants.

use crate::parser::{LexError, ParseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
