//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement   ::= if_stmt | while_stmt | decl_stmt | assign_stmt | expr_stmt
//! if_stmt     ::= "IF" expression "THEN" statement* ("ELSE" statement*)? "END"
//! while_stmt  ::= "WHILE" expression "DO" statement* "END"
//! decl_stmt   ::= "LET" IDENTIFIER ":" IDENTIFIER ("=" expression)? ";"
//! assign_stmt ::= IDENTIFIER "=" expression ";"
//! expr_stmt   ::= expression ";"
//! ```
//!
//! Keywords are recognised only when a statement starts with an identifier
//! whose literal is exactly `IF`, `WHILE` or `LET`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenType;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};
use log::trace;

impl Parser<'_> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.check_kind(TokenType::Identifier) {
            if self.match_token("IF") {
                return self.parse_if_statement();
            }

            if self.match_token("WHILE") {
                return self.parse_while_statement();
            }

            if self.match_token("LET") {
                return self.parse_declaration_statement();
            }

            if self.peek_ahead(1).is_some_and(|t| t.literal == "=") {
                return self.parse_assignment_statement();
            }
        }

        self.parse_expression_statement()
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        trace!("expression statement at token {}", self.position);
        let expr = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Statement::Expression(expr))
    }

    /// Parse declaration: `LET` has already been consumed
    fn parse_declaration_statement(&mut self) -> Result<Statement, ParseError> {
        trace!("declaration at token {}", self.position);
        let name = self.expect_identifier(ParseErrorKind::MissingName)?;
        self.expect_token(":", ParseErrorKind::MissingColon)?;
        let type_name = self.expect_identifier(ParseErrorKind::MissingTypeName)?;

        let value = if self.match_token("=") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect_semicolon()?;

        Ok(Statement::Declaration {
            name,
            type_name,
            value,
        })
    }

    /// Parse assignment: caller has seen `IDENTIFIER "="`
    fn parse_assignment_statement(&mut self) -> Result<Statement, ParseError> {
        trace!("assignment at token {}", self.position);
        let name = self.expect_identifier(ParseErrorKind::MissingName)?;
        self.expect_token("=", ParseErrorKind::MissingKeyword("="))?;
        let value = self.parse_expression()?;
        self.expect_semicolon()?;

        Ok(Statement::Assignment { name, value })
    }

    /// Parse if statement: `IF` has already been consumed
    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        trace!("if statement at token {}", self.position);
        let condition = self.parse_expression()?;
        self.expect_keyword("THEN")?;

        let mut then_statements = Vec::new();
        let mut else_statements = Vec::new();
        loop {
            if self.match_token("END") {
                break;
            }
            if self.match_token("ELSE") {
                else_statements = self.parse_block()?;
                break;
            }
            if self.is_at_end() {
                return Err(self.error(ParseErrorKind::MissingKeyword("END")));
            }
            then_statements.push(self.parse_statement()?);
        }

        Ok(Statement::If {
            condition,
            then_statements,
            else_statements,
        })
    }

    /// Parse while statement: `WHILE` has already been consumed
    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        trace!("while statement at token {}", self.position);
        let condition = self.parse_expression()?;
        self.expect_keyword("DO")?;
        let statements = self.parse_block()?;

        Ok(Statement::While {
            condition,
            statements,
        })
    }

    /// Parse statements up to and including the closing `END`
    fn parse_block(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.match_token("END") {
            if self.is_at_end() {
                return Err(self.error(ParseErrorKind::MissingKeyword("END")));
            }
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }
}
