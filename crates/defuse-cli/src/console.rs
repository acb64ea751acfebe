//! The real terminal console: prompts on stdout, answers from stdin.

use std::io::{self, BufRead, Write};

use defuse_core::console::{Console, PROMPT};
use defuse_core::error::SolveError;

#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn emit(&mut self, message: &str) {
        println!("{message}");
    }

    fn read_response(&mut self) -> Result<String, SolveError> {
        print!("{PROMPT}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(SolveError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
