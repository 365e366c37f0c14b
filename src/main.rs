use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use monkey::{
    errors::errors::ErrorTip,
    parser::parser::parse,
    repl::repl::{self, write_parse_errors, ReplConfig},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("MONKEY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(file_path) => run_file(PathBuf::from(file_path)),
        None => {
            let config = ReplConfig::from_env();
            println!("{}", config.greeting());
            println!("Feel free to type in commands");

            let stdin = io::stdin();
            repl::start(&config, stdin.lock(), io::stdout()).context("REPL I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_file(path: PathBuf) -> anyhow::Result<ExitCode> {
    let source = read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "parsing file");

    let (parser, program) = parse(source);
    info!(statements = program.len(), errors = parser.errors().len(), "parsed file");
    if parser.errors().is_empty() {
        println!("{}", program);
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdout = io::stdout().lock();
    write_parse_errors(&mut stdout, &parser.error_messages())?;
    for error in parser.errors() {
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            writeln!(stdout, "help ({}): {}", error.get_error_name(), tip)?;
        }
    }
    stdout.flush()?;

    Ok(ExitCode::FAILURE)
}
