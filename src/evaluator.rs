use tracing::debug;

use crate::{
    ast::{Node, Program},
    environment::Environment,
    expr,
    stmt,
    value::Value,
};

/// Evaluates a node against `environment`. Yields `None` only when the
/// node produces no value, such as a successful `let`.
pub fn eval<'n, N: Into<Node<'n>>>(node: N, environment: &mut Environment<'_>) -> Option<Value> {
    let mut evaluator = Evaluator { environment };
    match node.into() {
        Node::Program(p) => evaluator.eval_program(p),
        Node::Statement(s) => s.accept(&mut evaluator),
        Node::Expression(e) => Some(e.accept(&mut evaluator)),
    }
}

struct Evaluator<'e, 'outer> {
    environment: &'e mut Environment<'outer>,
}

impl <'e, 'outer> Evaluator<'e, 'outer> {
    /// Runs statements in order, stopping at the first error or returned
    /// value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = p.statements.len()))]
    fn eval_program(&mut self, p: &Program) -> Option<Value> {
        let mut result = None;
        for statement in p.statements.iter() {
            match statement.accept::<Option<Value>, _>(self) {
                Some(Value::ReturnValue(value)) => return Some(*value),
                Some(error @ Value::Error(_)) => return Some(error),
                other => result = other,
            }
        }
        result
    }
}

impl <'e, 'outer> stmt::Visitor<Option<Value>> for Evaluator<'e, 'outer> {
    fn visit_let_stmt(&mut self, s: &stmt::Let) -> Option<Value> {
        let value: Value = s.value.accept(self);
        if value.is_error() {
            return Some(value)
        }
        self.environment.set(s.name.name(), value);
        None
    }

    fn visit_expression_stmt(&mut self, s: &stmt::Expression) -> Option<Value> {
        Some(s.expression.accept(self))
    }
}

impl <'e, 'outer> expr::Visitor<Value> for Evaluator<'e, 'outer> {
    fn visit_identifier_expr(&mut self, e: &expr::Identifier) -> Value {
        self.environment.get(e.name())
            .cloned()
            .unwrap_or_else(|| error(format!("identifier not found: {}", e.name())))
    }

    fn visit_integer_literal_expr(&mut self, e: &expr::IntegerLiteral) -> Value {
        Value::Integer(e.value)
    }

    fn visit_prefix_expr(&mut self, e: &expr::Prefix) -> Value {
        let right: Value = e.right.accept(self);
        if right.is_error() {
            return right
        }
        eval_prefix(&e.operator, right)
    }

    fn visit_infix_expr(&mut self, e: &expr::Infix) -> Value {
        let left: Value = e.left.accept(self);
        if left.is_error() {
            return left
        }
        let right: Value = e.right.accept(self);
        if right.is_error() {
            return right
        }
        eval_infix(&e.operator, left, right)
    }
}

fn eval_prefix(operator: &str, right: Value) -> Value {
    match (operator, right) {
        ("-", Value::Integer(n)) => Value::Integer(n.wrapping_neg()),
        // No value type supports logical negation yet.
        (op, right) => error(format!("unknown operator: {}{}", op, right.type_name())),
    }
}

fn eval_infix(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => compute_integers(operator, *l, *r),
        _ => error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            operator,
            right.type_name()
        )),
    }
}

/// Integer arithmetic wraps on overflow. Comparison operators have no
/// integer semantics yet and report an unknown operator.
fn compute_integers(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" if right == 0 => error(format!("division by zero: {} / {}", left, right)),
        "/" => Value::Integer(left.wrapping_div(right)),
        _ => error(format!("unknown operator: INTEGER {} INTEGER", operator)),
    }
}

fn error(message: String) -> Value {
    debug!(%message, "evaluation error");
    Value::Error(message)
}
