//! Line-input collaborator for the interactive session.

use std::io::{self, BufRead, Write};

/// Prompts the user and returns one trimmed line of input.
pub trait LineInput {
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}

/// Reads from stdin, writing the prompt to stdout first.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl LineInput for StdinInput {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Replays a fixed sequence of answers; for session tests.
#[cfg(test)]
pub struct ScriptedInput {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl LineInput for ScriptedInput {
    fn prompt(&mut self, _message: &str) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}
