//! Session execution
//!
//! A `Session` owns one `Stack<String>` and applies commands to it, writing
//! results to the given output. Failures are either fatal or reported and
//! skipped, depending on `SessionConfig::keep_going`.

use std::io::{BufRead, Write};

use linkstack::Stack;
use tracing::{debug, info, warn};

use crate::command::{Command, parse_line};
use crate::config::SessionConfig;
use crate::error::CommandError;

/// What the caller should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Session {
    stack: Stack<String>,
    config: SessionConfig,
    /// Commands that failed and were skipped under `keep_going`
    failures: usize,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            stack: Stack::new(),
            config,
            failures: 0,
        }
    }

    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Apply one parsed command
    pub fn execute<W: Write>(
        &mut self,
        line: usize,
        command: Command,
        out: &mut W,
    ) -> Result<Outcome, CommandError> {
        debug!(line, ?command, "executing");
        match command {
            Command::Push(value) => {
                self.stack.push(value);
                self.echo(out)?;
            }
            Command::Pop => {
                let value = self
                    .stack
                    .pop()
                    .map_err(|source| CommandError::Stack { line, source })?;
                writeln!(out, "{}", value)?;
                self.echo(out)?;
            }
            Command::Top => {
                let value = self
                    .stack
                    .top()
                    .map_err(|source| CommandError::Stack { line, source })?;
                writeln!(out, "{}", value)?;
            }
            Command::Empty => writeln!(out, "{}", self.stack.is_empty())?,
            Command::Show => writeln!(out, "{}", self.stack.render())?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    /// Parse and apply one raw input line
    pub fn run_line<W: Write>(
        &mut self,
        line: usize,
        text: &str,
        out: &mut W,
    ) -> Result<Outcome, CommandError> {
        match parse_line(line, text)? {
            Some(command) => self.execute(line, command, out),
            None => Ok(Outcome::Continue),
        }
    }

    /// Run commands until end of input or `quit`
    ///
    /// Interactive sessions print the prompt before each line and never stop
    /// on a command error. I/O errors always end the session. Returns the
    /// number of commands that failed and were skipped.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        interactive: bool,
    ) -> Result<usize, CommandError> {
        info!(interactive, "session started");
        let keep_going = interactive || self.config.keep_going;
        let mut buf = String::new();
        let mut line = 0;

        loop {
            if interactive {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }
            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                break;
            }
            line += 1;

            match self.run_line(line, &buf, out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(e @ CommandError::Io(_)) => return Err(e),
                Err(e) if keep_going => {
                    warn!(line, error = %e, "command failed");
                    writeln!(err, "error: {}", e)?;
                    self.failures += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(lines = line, failures = self.failures, "session finished");
        Ok(self.failures)
    }

    fn echo<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        if self.config.echo_render {
            writeln!(out, "{}", self.stack.render())?;
        }
        Ok(())
    }
}
