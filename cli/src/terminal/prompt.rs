//! # Console Prompting
//!
//! Reads answers line by line from any [`BufRead`] and writes prompts to any
//! [`Write`], so the interactive loops can be driven from tests with in-memory
//! buffers.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::*;
use primer_common::{error, warn};

use crate::terminal::colors;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Shows `prompt` and reads one trimmed line. `None` means end of input.
    pub fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{} ", prompt.color(colors::PROMPT))?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::read_answer`], but end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        match self.read_answer(prompt)? {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("input closed while waiting for an answer"),
        }
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// Empty answers and rejected ones are reported, then the prompt is shown again.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> anyhow::Result<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                warn!("Invalid input. Please try again.");
                continue;
            }

            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => error!("{reason}"),
            }
        }
    }
}

pub fn parse_count(answer: &str) -> Result<usize, String> {
    answer
        .parse::<usize>()
        .map_err(|_| format!("'{answer}' is not a whole, non-negative number"))
}

pub fn parse_number(answer: &str) -> Result<f64, String> {
    answer
        .parse::<f64>()
        .map_err(|_| format!("'{answer}' is not a number"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
