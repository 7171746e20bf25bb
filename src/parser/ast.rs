// AST (Abstract Syntax Tree) definitions for the PLC compiler

pub use super::numeral::{BigDecimal, BigInteger};

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Boolean(bool),
    Integer(BigInteger),
    Decimal(BigDecimal),
    /// String contents without the surrounding quotes
    String(String),
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    /// Explicitly parenthesized expression
    Group(Box<Expression>),
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Variable(String),
    Function {
        name: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }

    pub fn integer(value: impl Into<BigInteger>) -> Self {
        Expression::Literal(Literal::Integer(value.into()))
    }

    pub fn decimal(value: BigDecimal) -> Self {
        Expression::Literal(Literal::Decimal(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    pub fn group(inner: Expression) -> Self {
        Expression::Group(Box::new(inner))
    }

    pub fn binary(operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn function(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Function {
            name: name.into(),
            arguments,
        }
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(Expression),
    Declaration {
        name: String,
        type_name: String, // echoed verbatim, never interpreted
        value: Option<Expression>,
    },
    Assignment {
        name: String,
        value: Expression,
    },
    If {
        condition: Expression,
        then_statements: Vec<Statement>,
        else_statements: Vec<Statement>,
    },
    While {
        condition: Expression,
        statements: Vec<Statement>,
    },
}

/// Root of a parsed program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub statements: Vec<Statement>,
}

impl Source {
    pub fn new(statements: Vec<Statement>) -> Self {
        Source { statements }
    }
}
