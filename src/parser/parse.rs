//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, token-stream helpers, and the [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser over an already-lexed token slice:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: `IF`, `WHILE`, `LET`, assignment and expression statements
//! - `expressions`: the equality / additive / multiplicative / primary tiers
//!
//! Parser methods are split across these files using `impl Parser` blocks.
//!
//! Keywords and punctuation are matched by the token's literal text, so
//! `IF` is only special where a statement may begin.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenType};
use log::debug;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected ';' at the end of a statement")]
    MissingSemicolon,
    #[error("expected a variable name after 'LET'")]
    MissingName,
    #[error("expected ':' after the declared name")]
    MissingColon,
    #[error("expected a type name after ':'")]
    MissingTypeName,
    #[error("expected '{0}'")]
    MissingKeyword(&'static str),
    #[error("expected ')' to close the parenthesized expression")]
    UnclosedGroup,
    #[error("expected an expression after ','")]
    TrailingComma,
    #[error("expected ',' or ')' after a function argument")]
    InvalidArgument,
    #[error("expected the beginning of an expression")]
    ExpectedExpression,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("malformed numeric literal")]
    MalformedNumber,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at token {token_index}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token_index: usize,
}

impl ParseError {
    /// Human-readable description, without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Parses a complete token sequence into a [`Source`].
pub fn parse(tokens: &[Token]) -> Result<Source, ParseError> {
    Parser::new(tokens).parse_source()
}

/// Recursive descent parser for PLC
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) position: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program
    pub fn parse_source(&mut self) -> Result<Source, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        debug!("parsed {} top-level statements", statements.len());
        Ok(Source::new(statements))
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// True if the current token's literal is exactly `literal`.
    pub(crate) fn check(&self, literal: &str) -> bool {
        self.peek().is_some_and(|t| t.literal == literal)
    }

    pub(crate) fn check_kind(&self, kind: TokenType) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn match_token(&mut self, literal: &str) -> bool {
        if self.check(literal) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenType) -> Option<&'t Token> {
        if self.check_kind(kind) {
            self.advance()
        } else {
            None
        }
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            token_index: self.position,
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        literal: &str,
        kind: ParseErrorKind,
    ) -> Result<(), ParseError> {
        if self.match_token(literal) {
            Ok(())
        } else {
            Err(self.error(kind))
        }
    }

    pub(crate) fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect_token(";", ParseErrorKind::MissingSemicolon)
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        self.expect_token(keyword, ParseErrorKind::MissingKeyword(keyword))
    }

    pub(crate) fn expect_identifier(&mut self, kind: ParseErrorKind) -> Result<String, ParseError> {
        match self.match_kind(TokenType::Identifier) {
            Some(token) => Ok(token.literal.clone()),
            None => Err(self.error(kind)),
        }
    }
}
