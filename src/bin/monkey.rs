use monkey_rs::{
    repl::Repl,
    Environment,
    Value,
};
use std::{
    env,
    io::{self, Write},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> io::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run_prompt()?,
        2 => run_file(args[1].as_str())?,
        _ => {
            writeln!(io::stdout(), "Usage: monkey [script]")?;
            std::process::exit(64);
        },
    };

    Ok(())
}

/// Logging stays off unless `RUST_LOG` is set.
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    Repl::new(stdin.lock(), io::stdout()).start()
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut environment = Environment::global();

    match monkey_rs::run(contents.as_str(), &mut environment) {
        Err(e) if e.is_syntactic() => {
            for message in e.messages().iter() {
                writeln!(stderr, "{}", message)?;
            }
            std::process::exit(65);
        },
        Err(e) => Err(e.into()),
        Ok(Some(Value::Error(message))) => {
            writeln!(stderr, "ERROR: {}", message)?;
            std::process::exit(70);
        },
        Ok(Some(value)) => writeln!(stdout, "{}", value),
        Ok(None) => Ok(()),
    }
}
