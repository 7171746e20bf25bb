//! Lexer (tokenizer) for PLC source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Keywords are not recognised here: `IF`, `LET` and friends are ordinary
//! identifiers that the parser matches by their literal text.

use log::{debug, trace};
use std::fmt;
use thiserror::Error;

/// Token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Identifier,
    Integer,
    Decimal,
    String,
    Operator,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Identifier => "identifier",
            TokenType::Integer => "integer",
            TokenType::Decimal => "decimal",
            TokenType::String => "string",
            TokenType::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A classified slice of the source text.
///
/// `start` is a character offset into the source, so error positions line up
/// with what an editor shows for non-ASCII input as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub literal: String,
    pub start: usize,
}

impl Token {
    pub fn new(kind: TokenType, literal: impl Into<String>, start: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            start,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenType::String => write!(f, "string literal {}", self.literal),
            kind => write!(f, "{} '{}'", kind, self.literal),
        }
    }
}

/// What went wrong while lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("decimal point must be followed by a digit")]
    MalformedDecimal,
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexer error at offset {offset}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

/// Lexes `source` into its complete token sequence.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for PLC source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    length: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            length: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            if self.peek().is_some_and(is_whitespace) {
                self.advance();
                self.skip();
                continue;
            }

            let token = self.next_token()?;
            trace!("lexed {} at {}", token, token.start);
            tokens.push(token);
        }

        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => Ok(self.identifier()),
            Some(ch) if ch.is_ascii_digit() => self.number_literal(),
            Some('"') => self.string_literal(),
            _ => Ok(self.operator()),
        }
    }

    fn identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            self.advance();
        }
        self.emit(TokenType::Identifier)
    }

    /// Parse numeric literal: digits, optionally with one fractional part.
    /// Leading zeros are accepted.
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let mut is_decimal = false;

        while self.match_char(|ch| ch.is_ascii_digit()) {
            if self.match_char(|ch| ch == '.') {
                if !self.match_char(|ch| ch.is_ascii_digit()) {
                    return Err(LexError {
                        kind: LexErrorKind::MalformedDecimal,
                        offset: self.position,
                    });
                }
                is_decimal = true;
            }
        }

        Ok(self.emit(if is_decimal {
            TokenType::Decimal
        } else {
            TokenType::Integer
        }))
    }

    /// Parse string literal. The emitted literal keeps both quotes and no
    /// escapes are interpreted.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let opening_quote = self.position;

        while !self.is_at_end() {
            self.advance();
            if self.match_char(|ch| ch == '"') {
                return Ok(self.emit(TokenType::String));
            }
        }

        Err(LexError {
            kind: LexErrorKind::UnterminatedString,
            offset: opening_quote,
        })
    }

    /// `==` and `!=` are the only two-character operators; any other
    /// character becomes a single-character operator.
    fn operator(&mut self) -> Token {
        let pair = (self.peek(), self.peek_ahead(1));
        if matches!(pair, (Some('=' | '!'), Some('='))) {
            self.advance();
        }
        self.advance();
        self.emit(TokenType::Operator)
    }

    /// Consume the next character if it satisfies `pred`.
    fn match_char(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Build a token from the characters accumulated since the last emit.
    fn emit(&mut self, kind: TokenType) -> Token {
        let start = self.position - self.length;
        self.skip();
        let literal: String = self.input[start..self.position].iter().collect();
        Token::new(kind, literal, start)
    }

    /// Drop the accumulated characters without emitting them.
    fn skip(&mut self) {
        self.length = 0;
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
        self.length += 1;
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// ASCII whitespace including vertical tab.
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
