use std::io::{BufRead, Write};

use crate::error::{Result, TemplateError};

/// Answers the questions the tree walker raises about candidate values.
///
/// Abstracted as a trait so the walk is testable without a live terminal:
/// tests supply a [`ScriptedOracle`] with canned answers.
pub trait DecisionOracle {
    /// Ask a yes/no question. Implementations keep asking until they get an
    /// answer they recognize.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Ask a free-text question. An empty or whitespace-only reply yields
    /// `default`.
    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String>;
}

fn parse_yes_no(reply: &str) -> Option<bool> {
    match reply.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interactive oracle over a line-oriented reader/writer pair.
///
/// The binary wires this to stdin/stderr so prompts never mix into the
/// rendered template on stdout.
pub struct TerminalOracle<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalOracle<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_reply(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF while a question is pending; bail rather than re-prompt forever
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> DecisionOracle for TerminalOracle<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{prompt} (y/n): ")?;
            self.output.flush()?;
            let reply = self.read_reply()?;
            match parse_yes_no(&reply) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let reply = self.read_reply()?;
        if reply.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(reply)
        }
    }
}

/// Non-interactive oracle that replays a fixed sequence of answers.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    answers: Vec<String>,
    cursor: usize,
}

impl ScriptedOracle {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    fn next_answer(&mut self) -> Result<&str> {
        let answer = self
            .answers
            .get(self.cursor)
            .ok_or(TemplateError::ScriptExhausted(self.answers.len()))?;
        self.cursor += 1;
        Ok(answer)
    }
}

impl DecisionOracle for ScriptedOracle {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        // Same retry semantics as the terminal: skip answers that are not
        // recognizably yes/no.
        loop {
            log::debug!("confirm: {prompt}");
            let reply = self.next_answer()?.to_string();
            if let Some(answer) = parse_yes_no(&reply) {
                return Ok(answer);
            }
        }
    }

    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String> {
        log::debug!("ask_text: {prompt}");
        let reply = self.next_answer()?;
        if reply.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(reply.to_string())
        }
    }
}
