//! Java code generation
//!
//! The [`Generator`] walks a parsed [`Source`] and writes equivalent Java
//! text: every statement goes inside `main` of a fixed `Main` class, one
//! statement per line, indented four spaces per nesting level.
//!
//! Generation is a structural pretty-print. Nothing is validated: operator
//! strings, type names and identifiers are written exactly as they appear in
//! the AST, and parentheses come only from [`Expression::Group`] nodes.

pub mod constants;

use crate::parser::ast::*;
use constants::*;
use log::debug;

/// Render a whole program, including the class wrapper and trailing newline.
pub fn generate(source: &Source) -> String {
    let mut generator = Generator::new();
    generator.source(source);
    let output = generator.finish();
    debug!(
        "generated {} bytes for {} statements",
        output.len(),
        source.statements.len()
    );
    output
}

/// Render a single statement at indentation level zero, without the wrapper.
pub fn generate_statement(statement: &Statement) -> String {
    let mut generator = Generator::new();
    generator.statement(statement);
    generator.finish()
}

/// Render a single expression.
pub fn generate_expression(expression: &Expression) -> String {
    let mut generator = Generator::new();
    generator.expression(expression);
    generator.finish()
}

/// Text writer that tracks the current nesting level.
#[derive(Debug, Default)]
pub struct Generator {
    output: String,
    indent: usize,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the generator and return everything written so far.
    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Start a new line at the given nesting level.
    fn newline(&mut self, indent: usize) {
        self.output.push_str(NEWLINE);
        for _ in 0..indent {
            self.output.push_str(INDENT);
        }
    }

    pub fn source(&mut self, source: &Source) {
        self.write(CLASS_HEADER);
        self.newline(0);
        self.indent += 1;
        self.newline(self.indent);
        self.write(MAIN_HEADER);
        self.block(&source.statements);
        self.write(BLOCK_END);
        self.indent -= 1;
        self.newline(self.indent);
        self.newline(0);
        self.write(BLOCK_END);
        self.newline(0);
    }

    /// Body of a `{ ... }` block whose opening brace is already written.
    /// Empty blocks stay on one line as `{}`.
    fn block(&mut self, statements: &[Statement]) {
        if statements.is_empty() {
            return;
        }

        self.indent += 1;
        for statement in statements {
            self.newline(self.indent);
            self.statement(statement);
        }
        self.indent -= 1;
        self.newline(self.indent);
    }

    pub fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expression(expr) => {
                self.expression(expr);
                self.write(";");
            }
            Statement::Declaration {
                name,
                type_name,
                value,
            } => {
                self.write(type_name);
                self.write(" ");
                self.write(name);
                if let Some(value) = value {
                    self.write(" = ");
                    self.expression(value);
                }
                self.write(";");
            }
            Statement::Assignment { name, value } => {
                self.write(name);
                self.write(" = ");
                self.expression(value);
                self.write(";");
            }
            Statement::If {
                condition,
                then_statements,
                else_statements,
            } => {
                self.write("if (");
                self.expression(condition);
                self.write(") {");
                self.block(then_statements);
                self.write(BLOCK_END);
                if !else_statements.is_empty() {
                    self.write(" else {");
                    self.block(else_statements);
                    self.write(BLOCK_END);
                }
            }
            Statement::While {
                condition,
                statements,
            } => {
                self.write("while (");
                self.expression(condition);
                self.write(") {");
                self.block(statements);
                self.write(BLOCK_END);
            }
        }
    }

    pub fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Literal(literal) => self.literal(literal),
            Expression::Group(inner) => {
                self.write("(");
                self.expression(inner);
                self.write(")");
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                self.expression(left);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.expression(right);
            }
            Expression::Variable(name) => self.write(name),
            Expression::Function { name, arguments } => {
                self.write(name);
                self.write("(");
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.expression(argument);
                }
                self.write(")");
            }
        }
    }

    fn literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Boolean(value) => self.write(if *value { "true" } else { "false" }),
            Literal::Integer(value) => self.write(value.as_str()),
            Literal::Decimal(value) => self.write(value.as_str()),
            Literal::String(value) => {
                self.write("\"");
                self.write(value);
                self.write("\"");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(argument: Expression) -> Statement {
        Statement::Expression(Expression::function("PRINT", vec![argument]))
    }

    #[test]
    fn test_empty_source() {
        let expected = "public final class Main {\n\
                        \n    public static void main(String[] args) {}\n\
                        \n}\n";
        assert_eq!(generate(&Source::default()), expected);
    }

    #[test]
    fn test_literals() {
        assert_eq!(generate_expression(&Expression::boolean(true)), "true");
        assert_eq!(generate_expression(&Expression::boolean(false)), "false");
        assert_eq!(generate_expression(&Expression::integer(10)), "10");
        assert_eq!(
            generate_expression(&Expression::decimal("1.000".parse().unwrap())),
            "1.000"
        );
        assert_eq!(
            generate_expression(&Expression::string("why?")),
            "\"why?\""
        );
    }

    #[test]
    fn test_string_is_not_escaped() {
        assert_eq!(
            generate_expression(&Expression::string("a\\n\"")),
            "\"a\\n\"\""
        );
    }

    #[test]
    fn test_operator_written_verbatim() {
        let expr = Expression::binary("<=>", Expression::variable("a"), Expression::variable("b"));
        assert_eq!(generate_expression(&expr), "a <=> b");
    }

    #[test]
    fn test_function_arguments() {
        assert_eq!(generate_expression(&Expression::function("f", vec![])), "f()");
        assert_eq!(
            generate_expression(&Expression::function(
                "PRINT",
                vec![Expression::variable("x"), Expression::variable("y")]
            )),
            "PRINT(x, y)"
        );
    }

    #[test]
    fn test_if_else() {
        let stmt = Statement::If {
            condition: Expression::variable("ok"),
            then_statements: vec![print(Expression::string("yes"))],
            else_statements: vec![print(Expression::string("no"))],
        };

        assert_eq!(
            generate_statement(&stmt),
            "if (ok) {\n    PRINT(\"yes\");\n} else {\n    PRINT(\"no\");\n}"
        );
    }

    #[test]
    fn test_empty_then_with_else() {
        let stmt = Statement::If {
            condition: Expression::variable("ok"),
            then_statements: vec![],
            else_statements: vec![print(Expression::integer(1))],
        };

        assert_eq!(
            generate_statement(&stmt),
            "if (ok) {} else {\n    PRINT(1);\n}"
        );
    }

    #[test]
    fn test_empty_while() {
        let stmt = Statement::While {
            condition: Expression::boolean(true),
            statements: vec![],
        };
        assert_eq!(generate_statement(&stmt), "while (true) {}");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let source = Source::new(vec![
            Statement::Declaration {
                name: "i".to_string(),
                type_name: "INTEGER".to_string(),
                value: None,
            },
            print(Expression::variable("i")),
        ]);

        assert_eq!(generate(&source), generate(&source));
    }
}
