use std::fmt::{self, Display};

use crate::{
    ast::{Node, Program},
    expr::{self, Expr},
    stmt::{self, Stmt},
};

pub fn print<'a, N: Into<Node<'a>>>(node: N) -> String {
    let mut printer = AstPrinter {};
    match node.into() {
        Node::Program(p) => printer.print_program(p),
        Node::Statement(s) => s.accept(&mut printer),
        Node::Expression(e) => e.accept(&mut printer),
    }
}

struct AstPrinter;

impl AstPrinter {
    fn print_program(&mut self, p: &Program) -> String {
        p.statements.iter()
            .map(|s| s.accept::<String, _>(self))
            .collect()
    }

    fn parenthesize(&mut self, parts: &[&str]) -> String {
        let mut s = String::new();
        s.push('(');
        for part in parts.iter() {
            s.push_str(part);
        }
        s.push(')');
        s
    }
}

impl stmt::Visitor<String> for AstPrinter {
    fn visit_let_stmt(&mut self, s: &stmt::Let) -> String {
        format!(
            "{} {} = {};",
            s.token_literal(),
            s.name.name(),
            s.value.accept::<String, _>(self)
        )
    }

    fn visit_expression_stmt(&mut self, s: &stmt::Expression) -> String {
        s.expression.accept(self)
    }
}

impl expr::Visitor<String> for AstPrinter {
    fn visit_identifier_expr(&mut self, e: &expr::Identifier) -> String {
        e.name.clone()
    }

    fn visit_integer_literal_expr(&mut self, e: &expr::IntegerLiteral) -> String {
        e.token_literal().to_string()
    }

    fn visit_prefix_expr(&mut self, e: &expr::Prefix) -> String {
        let right: String = e.right.accept(self);
        self.parenthesize(&[e.operator.as_str(), right.as_str()])
    }

    fn visit_infix_expr(&mut self, e: &expr::Infix) -> String {
        let left: String = e.left.accept(self);
        let right: String = e.right.accept(self);
        self.parenthesize(&[left.as_str(), " ", e.operator.as_str(), " ", right.as_str()])
    }
}

macro_rules! impl_to_text {
    ($($node:ty),+) => {
        $(
            impl $node {
                /// Canonical source-like rendering of this node.
                pub fn to_text(&self) -> String {
                    print(self)
                }
            }

            impl Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.to_text())
                }
            }
        )+
    };
}

impl_to_text!(Program, Stmt, Expr);

impl <'a> Node<'a> {
    pub fn to_text(&self) -> String {
        print(*self)
    }
}

impl <'a> Display for Node<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expr::Identifier,
        token::{Token, TokenKind},
    };
    use pretty_assertions::assert_eq;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(TokenKind::Identifier, name))
    }

    fn int(literal: &str, value: i64) -> Expr {
        Expr::new_integer_literal(Token::new(TokenKind::Integer, literal), value)
    }

    #[test]
    fn let_statement() {
        let program = Program {
            statements: vec![
                Stmt::new_let(
                    Token::new(TokenKind::Let, "let"),
                    ident("myVar"),
                    Expr::from(ident("anotherVar")),
                ),
            ],
        };
        assert_eq!("let myVar = anotherVar;", print(&program));
    }

    #[test]
    fn integer_literal_echoes_its_source_text() {
        assert_eq!("0x1F", print(&int("0x1F", 31)));
    }

    #[test]
    fn prefix_and_infix_are_parenthesized() {
        let e = Expr::new_infix(
            Expr::new_prefix(Token::new(TokenKind::Minus, "-"), int("123", 123)),
            Token::new(TokenKind::Asterisk, "*"),
            Expr::from(ident("b")),
        );
        assert_eq!("((-123) * b)", print(&e));
        assert_eq!("((-123) * b)", e.to_string());
        assert_eq!("*", Node::from(&e).token_literal());
    }

    #[test]
    fn program_concatenates_statements() {
        let program = Program {
            statements: vec![
                Stmt::new_let(Token::new(TokenKind::Let, "let"), ident("x"), int("5", 5)),
                Stmt::new_expression(Token::new(TokenKind::Identifier, "x"), Expr::from(ident("x"))),
            ],
        };
        assert_eq!("let x = 5;x", program.to_text());
        assert_eq!("let", program.token_literal());
        assert_eq!("let", Node::from(&program).token_literal());
        assert_eq!("x", Node::from(&program.statements[1]).token_literal());
    }

    #[test]
    fn empty_program_prints_nothing() {
        let program = Program::default();
        assert_eq!("", program.to_text());
        assert_eq!("", program.token_literal());
    }
}
