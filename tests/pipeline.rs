use monkey_rs::{eval, parse, run, Environment, Parser, Scanner, Value};
use pretty_assertions::assert_eq;

fn eval_fresh(src: &str) -> Option<Value> {
    run(src, &mut Environment::global()).expect("source should parse")
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(Some(Value::Integer(15)), eval_fresh("5 + 5 * 2"));
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(Some(Value::Integer(20)), eval_fresh("(5 + 5) * 2"));
}

#[test]
fn prefix_operators() {
    assert_eq!(Some(Value::Integer(-5)), eval_fresh("-5"));

    let bang = eval_fresh("!5").expect("a value");
    assert!(bang.inspect().contains("unknown operator: !INTEGER"), "{}", bang);
}

#[test]
fn let_bindings_persist_and_are_not_mutated_by_reads() {
    let mut env = Environment::global();
    assert_eq!(Some(Value::Integer(6)), run("let x = 5; x + 1", &mut env).unwrap());
    assert_eq!(Some(Value::Integer(5)), run("x", &mut env).unwrap());
}

#[test]
fn unknown_identifier() {
    assert_eq!(
        Some(Value::new_error("identifier not found: foobar")),
        eval_fresh("foobar")
    );
}

#[test]
fn missing_assign_is_a_syntax_error() {
    let error = parse("let x 5;").expect_err("should not parse");
    assert!(error.is_syntactic());
    assert!(error
        .messages()
        .iter()
        .any(|m| m == "expected next token to be =, got INT instead"));
}

#[test]
fn parser_and_evaluator_compose_from_a_scanner() {
    let mut parser = Parser::new(Scanner::new("let a = 2; let b = a * a; b - a"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    assert_eq!("let a = 2;let b = (a * a);(b - a)", program.to_text());
    assert_eq!(Some(Value::Integer(2)), eval(&program, &mut Environment::global()));
}

#[test]
fn nested_environment_sees_session_bindings() {
    let mut session = Environment::global();
    run("let base = 40;", &mut session).unwrap();

    let mut scope = Environment::enclosed(&session);
    assert_eq!(Some(Value::Integer(42)), run("base + 2", &mut scope).unwrap());
    run("let local = 1;", &mut scope).unwrap();
    assert!(!session.contains("local"));
}

#[test]
fn errors_stop_before_later_bindings() {
    let mut env = Environment::global();
    let result = run("let a = 1 / 0; let b = 2;", &mut env).unwrap();
    assert_eq!(Some(Value::new_error("division by zero: 1 / 0")), result);
    assert!(!env.contains("a"));
    assert!(!env.contains("b"));
}

#[test]
fn program_echoes_first_token_literal() {
    let program = parse("let x = 1; x").unwrap();
    assert_eq!("let", program.token_literal());
}

#[test]
fn oversized_expressions_fail_to_parse_instead_of_aborting() {
    let mut env = Environment::global();
    let chain = vec!["1"; 200_000].join(" + ");
    let error = run(&chain, &mut env).expect_err("too deep to parse");
    assert_eq!(vec!["expression nested too deeply".to_string()], error.messages());

    let negations = format!("{}5", "-".repeat(200_000));
    assert!(run(&negations, &mut env).is_err());
}

#[test]
fn moderately_nested_expressions_evaluate() {
    assert_eq!(Some(Value::Integer(100)), eval_fresh(&vec!["1"; 100].join(" + ")));
    assert_eq!(Some(Value::Integer(5)), eval_fresh(&format!("{}5", "-".repeat(100))));
}
