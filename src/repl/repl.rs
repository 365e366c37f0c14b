use std::{
    env,
    io::{self, BufRead, Write},
};

use tracing::debug;

use crate::parser::parser::parse;

pub const DEFAULT_PROMPT: &str = ">> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Name used in the greeting, if one could be found
    pub user: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(DEFAULT_PROMPT),
            user: None,
        }
    }
}

impl ReplConfig {
    /// Reads `MONKEY_PROMPT` and `USER` (or `USERNAME`) from the environment.
    pub fn from_env() -> Self {
        let prompt = env::var("MONKEY_PROMPT").unwrap_or_else(|_| String::from(DEFAULT_PROMPT));
        let user = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .ok()
            .filter(|name| !name.is_empty());

        ReplConfig { prompt, user }
    }

    pub fn greeting(&self) -> String {
        match &self.user {
            Some(user) => format!("Hello {}! This is the Monkey programming language!", user),
            None => String::from("Hello! This is the Monkey programming language!"),
        }
    }
}

/// Parses `source` and renders the outcome the way the REPL prints it.
///
/// # Returns
///
/// `Ok(rendering)` when the parser recorded no errors, otherwise
/// `Err(messages)` in the order they were recorded.
pub fn parse_source(source: &str) -> Result<String, Vec<String>> {
    let (parser, program) = parse(source);

    if parser.errors().is_empty() {
        Ok(program.to_string())
    } else {
        Err(parser.error_messages())
    }
}

pub fn write_parse_errors(output: &mut impl Write, messages: &[String]) -> io::Result<()> {
    writeln!(output, "Parser errors:")?;
    for message in messages {
        writeln!(output, "\t{}", message)?;
    }
    Ok(())
}

/// Runs the loop until `input` is exhausted.
pub fn start(config: &ReplConfig, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        debug!(%line, "evaluating line");

        match parse_source(&line) {
            Ok(rendering) => writeln!(output, "{}", rendering)?,
            Err(messages) => write_parse_errors(&mut output, &messages)?,
        }

        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }

    writeln!(output)?;
    writeln!(output, "Exiting...")?;
    output.flush()
}
