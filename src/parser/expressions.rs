//! Expression parsing implementation
//!
//! # Precedence
//!
//! ```text
//! expression     ::= equality
//! equality       ::= additive (("==" | "!=") additive)?
//! additive       ::= multiplicative (("+" | "-") multiplicative)?
//! multiplicative ::= primary (("*" | "/") primary)?
//! primary        ::= INTEGER | DECIMAL | STRING
//!                  | IDENTIFIER "(" (expression ("," expression)*)? ")"
//!                  | IDENTIFIER
//!                  | "(" expression ")"
//! ```
//!
//! Each binary tier applies its operator at most once: `a + b + c` is not an
//! expression, and chains must be written with explicit grouping such as
//! `(a + b) + c`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenType;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_equality()
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_additive()?;
        self.parse_binary_tail(left, &["==", "!="], Self::parse_additive)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_multiplicative()?;
        self.parse_binary_tail(left, &["+", "-"], Self::parse_multiplicative)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_primary()?;
        self.parse_binary_tail(left, &["*", "/"], Self::parse_primary)
    }

    /// Apply at most one operator from `operators` to `left`.
    fn parse_binary_tail(
        &mut self,
        left: Expression,
        operators: &[&str],
        operand: fn(&mut Self) -> Result<Expression, ParseError>,
    ) -> Result<Expression, ParseError> {
        let operator = match self.peek() {
            Some(token) if operators.contains(&token.literal.as_str()) => token.literal.clone(),
            _ => return Ok(left),
        };
        self.advance();

        let right = operand(self)?;
        Ok(Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parse primary (literals, variables, calls, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        if let Some(token) = self.match_kind(TokenType::Integer) {
            return token
                .literal
                .parse()
                .map(|n| Expression::Literal(Literal::Integer(n)))
                .map_err(|_| self.error(ParseErrorKind::MalformedNumber));
        }

        if let Some(token) = self.match_kind(TokenType::Decimal) {
            return token
                .literal
                .parse()
                .map(|n| Expression::Literal(Literal::Decimal(n)))
                .map_err(|_| self.error(ParseErrorKind::MalformedNumber));
        }

        if self.check_kind(TokenType::Identifier)
            && self.peek_ahead(1).is_some_and(|t| t.literal == "(")
        {
            return self.parse_function_call();
        }

        if let Some(token) = self.match_kind(TokenType::Identifier) {
            return Ok(match token.literal.as_str() {
                "TRUE" => Expression::boolean(true),
                "FALSE" => Expression::boolean(false),
                name => Expression::variable(name),
            });
        }

        if let Some(token) = self.match_kind(TokenType::String) {
            return Ok(Expression::string(unquote(&token.literal)));
        }

        if self.match_token("(") {
            let expr = self.parse_expression()?;
            self.expect_token(")", ParseErrorKind::UnclosedGroup)?;
            return Ok(Expression::group(expr));
        }

        if self.is_at_end() {
            Err(self.error(ParseErrorKind::UnexpectedEnd))
        } else {
            Err(self.error(ParseErrorKind::ExpectedExpression))
        }
    }

    /// Parse function call: `IDENTIFIER "(" args ")"`
    fn parse_function_call(&mut self) -> Result<Expression, ParseError> {
        let name = self.expect_identifier(ParseErrorKind::ExpectedExpression)?;
        self.expect_token("(", ParseErrorKind::ExpectedExpression)?;

        let mut arguments = Vec::new();
        while !self.match_token(")") {
            arguments.push(self.parse_expression()?);

            // a comma directly followed by any operator (`,,` `,)` `,(`) is rejected
            if self.check(",") && self.peek_ahead(1).is_some_and(|t| t.kind == TokenType::Operator) {
                return Err(self.error(ParseErrorKind::TrailingComma));
            }
            if self.match_token(",") {
                continue;
            }
            if !self.check(")") {
                return Err(self.error(ParseErrorKind::InvalidArgument));
            }
        }

        Ok(Expression::Function { name, arguments })
    }
}

/// Strip exactly one character from each end of a string literal token.
fn unquote(literal: &str) -> String {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::{lex, Token, TokenType};
    use crate::parser::parse::{parse, ParseErrorKind};

    fn parse_expr(source: &str) -> Expression {
        let tokens = lex(&format!("{};", source)).unwrap();
        let mut source = parse(&tokens).unwrap();
        match source.statements.remove(0) {
            Statement::Expression(expr) => expr,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    fn parse_err(source: &str) -> (ParseErrorKind, usize) {
        let err = parse(&lex(source).unwrap()).unwrap_err();
        (err.kind, err.token_index)
    }

    fn var(name: &str) -> Expression {
        Expression::variable(name)
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_expr("42"), Expression::integer(42));
        assert_eq!(
            parse_expr("3.14"),
            Expression::decimal("3.14".parse().unwrap())
        );
        assert_eq!(parse_expr("TRUE"), Expression::boolean(true));
        assert_eq!(parse_expr("FALSE"), Expression::boolean(false));
        assert_eq!(parse_expr("\"hello\""), Expression::string("hello"));
        assert_eq!(parse_expr("\"\""), Expression::string(""));
    }

    #[test]
    fn test_lowercase_true_is_variable() {
        assert_eq!(parse_expr("true"), var("true"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse_expr("a + b * c"),
            Expression::binary("+", var("a"), Expression::binary("*", var("b"), var("c")))
        );
        assert_eq!(
            parse_expr("a * b == c - d"),
            Expression::binary(
                "==",
                Expression::binary("*", var("a"), var("b")),
                Expression::binary("-", var("c"), var("d")),
            )
        );
    }

    #[test]
    fn test_single_operator_per_tier() {
        assert_eq!(
            parse_expr("a + b"),
            Expression::binary("+", var("a"), var("b"))
        );
        assert_eq!(parse_err("a + b + c;"), (ParseErrorKind::MissingSemicolon, 3));
        assert_eq!(parse_err("a == b == c;"), (ParseErrorKind::MissingSemicolon, 3));
    }

    #[test]
    fn test_grouping_allows_chains() {
        assert_eq!(
            parse_expr("(a + b) + c"),
            Expression::binary(
                "+",
                Expression::group(Expression::binary("+", var("a"), var("b"))),
                var("c"),
            )
        );
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(parse_expr("f()"), Expression::function("f", vec![]));
        assert_eq!(
            parse_expr("PRINT(x, \"y\", 1 + 2)"),
            Expression::function(
                "PRINT",
                vec![
                    var("x"),
                    Expression::string("y"),
                    Expression::binary("+", Expression::integer(1), Expression::integer(2)),
                ],
            )
        );
        assert_eq!(
            parse_expr("f(g(1))"),
            Expression::function("f", vec![Expression::function("g", vec![Expression::integer(1)])])
        );
    }

    #[test]
    fn test_comma_errors() {
        assert_eq!(parse_err("PRINT(a,,b);"), (ParseErrorKind::TrailingComma, 3));
        assert_eq!(parse_err("PRINT(a,);"), (ParseErrorKind::TrailingComma, 3));
        assert_eq!(parse_err("PRINT(a, (b));"), (ParseErrorKind::TrailingComma, 3));
        assert_eq!(parse_err("PRINT(,a);"), (ParseErrorKind::ExpectedExpression, 2));
        assert_eq!(parse_err("PRINT(a b);"), (ParseErrorKind::InvalidArgument, 3));
        assert_eq!(parse_err("PRINT(a"), (ParseErrorKind::InvalidArgument, 3));
    }

    #[test]
    fn test_group_errors() {
        assert_eq!(parse_err("(a;"), (ParseErrorKind::UnclosedGroup, 2));
        assert_eq!(parse_err("x = ;"), (ParseErrorKind::ExpectedExpression, 2));
        assert_eq!(parse_err("x ="), (ParseErrorKind::UnexpectedEnd, 2));
    }

    #[test]
    fn test_numbers_are_canonicalised() {
        assert_eq!(parse_expr("007"), Expression::integer(7));
        assert_eq!(
            parse_expr("123456789012345678901234567890"),
            Expression::integer("123456789012345678901234567890".parse::<BigInteger>().unwrap())
        );
    }

    #[test]
    fn test_malformed_number_token() {
        let tokens = vec![
            Token::new(TokenType::Integer, "12x", 0),
            Token::new(TokenType::Operator, ";", 3),
        ];
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedNumber);
        assert_eq!(err.token_index, 1);
    }
}
