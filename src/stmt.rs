use crate::{
    ast::{generate_ast, generate_visitor},
    expr::{Expr, Identifier},
    token::Token,
};

generate_ast!(
    Stmt,
    [
        Let        => { token: Token, name: Identifier, value: Expr };
        Expression => { token: Token, expression: Expr };
    ]
);

generate_visitor!(
    Stmt,
    [
        Let        => visit_let_stmt;
        Expression => visit_expression_stmt;
    ]
);

impl Stmt {
    pub(crate) fn new_let(token: Token, name: Identifier, value: Expr) -> Self {
        Stmt::Let(Let { token, name, value })
    }

    pub(crate) fn new_expression(token: Token, expression: Expr) -> Self {
        Stmt::Expression(Expression { token, expression })
    }
}
