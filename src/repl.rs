use std::io::{self, BufRead, Write};

use crate::{
    environment::Environment,
    evaluator::eval,
    parser::Parser,
};

pub const PROMPT: &str = ">> ";

/// An interactive session. Bindings made by one line stay visible to the
/// lines after it.
pub struct Repl<In, Out> {
    input: In,
    output: Out,
}

impl <In: BufRead, Out: Write> Repl<In, Out> {
    pub fn new(input: In, output: Out) -> Self {
        Self { input, output }
    }

    /// Reads lines until end of input.
    pub fn start(&mut self) -> io::Result<()> {
        let mut environment = Environment::global();
        let mut buffer = Vec::new();

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            buffer.clear();
            let num_bytes = self.input.read_until(b'\n', &mut buffer)?;
            if num_bytes == 0 { break };

            // Invalid UTF-8 scans as ILLEGAL rather than ending the session.
            let line = String::from_utf8_lossy(&buffer);
            self.run_line(&line, &mut environment)?;
        }

        Ok(())
    }

    fn run_line(&mut self, line: &str, environment: &mut Environment<'_>) -> io::Result<()> {
        let mut parser = Parser::from(line);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for message in parser.errors().iter() {
                writeln!(self.output, "\t{}", message)?;
            }
            return Ok(())
        }

        writeln!(self.output, "{}", program)?;

        if let Some(value) = eval(&program, environment) {
            writeln!(self.output, "{}", value.inspect())?;
        }
        Ok(())
    }

    pub fn into_output(self) -> Out {
        self.output
    }
}
