use crate::{
    expr::Expr,
    stmt::Stmt,
};

/// Generates an AST node family: a sum type with one variant per node,
/// a struct per node carrying the given fields, and a `token_literal`
/// accessor echoing the text of each node's originating `token` field.
macro_rules! generate_ast {
    ($name:ident, [$($typename:ident => { $($propname:ident: $proptype:ty),+ });+ $(;)?]) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $($typename($typename)),+
        }

        $(
            #[derive(Clone, Debug, PartialEq)]
            pub struct $typename {
                $(pub(crate) $propname: $proptype),+
            }

            impl $typename {
                pub fn token_literal(&self) -> &str {
                    self.token.literal()
                }
            }

            impl From<$typename> for $name {
                fn from(node: $typename) -> Self {
                    $name::$typename(node)
                }
            }
        )+

        impl $name {
            pub fn token_literal(&self) -> &str {
                match self {
                    $($name::$typename(n) => n.token_literal(),)+
                }
            }
        }
    }
}

/// Generates the visitor trait for a node family along with the
/// `accept` dispatcher routing each variant to its visit method.
macro_rules! generate_visitor {
    ($name:ident, [$($typename:ident => $visitname:ident);+ $(;)?]) => {
        pub(crate) trait Visitor<T> {
            $(fn $visitname(&mut self, n: &$typename) -> T;)+
        }

        impl $name {
            pub(crate) fn accept<T, V: Visitor<T>>(&self, v: &mut V) -> T {
                match self {
                    $($name::$typename(n) => v.$visitname(n),)+
                }
            }
        }
    };
}

pub(crate) use generate_ast;
pub(crate) use generate_visitor;

/// The root of every parse: statements in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub(crate) statements: Vec<Stmt>,
}

impl Program {
    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn token_literal(&self) -> &str {
        self.statements.first()
            .map(Stmt::token_literal)
            .unwrap_or("")
    }
}

/// A borrowed view over any evaluable or printable node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Stmt),
    Expression(&'a Expr),
}

impl <'a> Node<'a> {
    pub fn token_literal(&self) -> &'a str {
        match *self {
            Node::Program(p) => p.token_literal(),
            Node::Statement(s) => s.token_literal(),
            Node::Expression(e) => e.token_literal(),
        }
    }
}

impl <'a> From<&'a Program> for Node<'a> {
    fn from(p: &'a Program) -> Self {
        Node::Program(p)
    }
}

impl <'a> From<&'a Stmt> for Node<'a> {
    fn from(s: &'a Stmt) -> Self {
        Node::Statement(s)
    }
}

impl <'a> From<&'a Expr> for Node<'a> {
    fn from(e: &'a Expr) -> Self {
        Node::Expression(e)
    }
}
