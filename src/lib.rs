pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod expr;
pub mod parser;
pub mod printer;
pub mod repl;
pub mod scanner;
pub mod stmt;
pub mod token;
pub mod value;

pub use crate::{
    ast::{Node, Program},
    environment::Environment,
    error::{Error, ErrorKind, Result},
    evaluator::eval,
    parser::Parser,
    scanner::Scanner,
    value::Value,
};

/// Parses `source`, failing with every logged diagnostic if the parser
/// reported any.
pub fn parse(source: &str) -> Result<Program> {
    let mut parser = Parser::from(source);
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(Error::syntactic(parser.errors().to_vec()))
    }
}

/// Parses and evaluates `source` in `environment`.
pub fn run(source: &str, environment: &mut Environment<'_>) -> Result<Option<Value>> {
    let program = parse(source)?;
    Ok(eval(&program, environment))
}
