use crate::types::Credential;
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const TOKEN_PROMPT: &str = "Enter your API token to authenticate:";

/// Source of the API token for a run.
pub trait CredentialProvider {
    fn acquire(&mut self) -> Result<Credential>;
}

/// Writes the token prompt and reads one line back.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Prompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompt { reader, writer }
    }
}

impl<R: BufRead, W: Write> CredentialProvider for Prompt<R, W> {
    fn acquire(&mut self) -> Result<Credential> {
        write!(self.writer, "{}", TOKEN_PROMPT)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context("Failed to read API token from stdin")?;
        Ok(Credential::new(strip_line_ending(&line)))
    }
}

/// Reads the token from the terminal without echoing it.
pub struct HiddenPrompt;

impl CredentialProvider for HiddenPrompt {
    fn acquire(&mut self) -> Result<Credential> {
        let token = rpassword::prompt_password(TOKEN_PROMPT)
            .context("Failed to read API token from terminal")?;
        Ok(Credential::new(token))
    }
}

/// Only the line terminator is removed; surrounding whitespace is kept.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
pub struct FixedToken(pub Credential);

#[cfg(test)]
impl CredentialProvider for FixedToken {
    fn acquire(&mut self) -> Result<Credential> {
        Ok(self.0.clone())
    }
}
