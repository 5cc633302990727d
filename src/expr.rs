use crate::{
    ast::{generate_ast, generate_visitor},
    token::Token,
};

generate_ast!(
    Expr,
    [
        Identifier     => { token: Token, name: String };
        IntegerLiteral => { token: Token, value: i64 };
        Prefix         => { token: Token, operator: String, right: Box<Expr> };
        Infix          => { token: Token, left: Box<Expr>, operator: String, right: Box<Expr> };
    ]
);

generate_visitor!(
    Expr,
    [
        Identifier     => visit_identifier_expr;
        IntegerLiteral => visit_integer_literal_expr;
        Prefix         => visit_prefix_expr;
        Infix          => visit_infix_expr;
    ]
);

impl Identifier {
    pub(crate) fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Expr {
    pub(crate) fn new_integer_literal(token: Token, value: i64) -> Self {
        Expr::IntegerLiteral(IntegerLiteral { token, value })
    }

    /// The operator text is taken from the operator token itself.
    pub(crate) fn new_prefix(token: Token, right: Expr) -> Self {
        let operator = token.literal.clone();
        Expr::Prefix(Prefix { token, operator, right: Box::new(right) })
    }

    pub(crate) fn new_infix(left: Expr, token: Token, right: Expr) -> Self {
        let operator = token.literal.clone();
        Expr::Infix(Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Height of the tree rooted here. Leaves count as one.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Expr::Identifier(_) | Expr::IntegerLiteral(_) => 1,
            Expr::Prefix(p) => 1 + p.right.depth(),
            Expr::Infix(i) => 1 + i.left.depth().max(i.right.depth()),
        }
    }
}
