use crate::api::ProjectSource;
use crate::config::Config;
use crate::prompt::CredentialProvider;
use crate::types::Credential;
use anyhow::{Context, Result};
use std::io::Write;

pub const FAILURE_HINT: &str = "Invalid API or no API provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Projects were printed; holds how many.
    Listed(usize),
    /// The query failed and the hint was printed.
    Failed,
}

/// Prompts for a token, connects with it, lists projects once and reports
/// the result to `out`.
///
/// A failed query is reported, not returned: the `Err` case only covers
/// reading the token and writing to `out`.
pub async fn run<P, F, S, W>(
    config: &Config,
    credentials: &mut P,
    connect: F,
    out: &mut W,
) -> Result<Outcome>
where
    P: CredentialProvider,
    F: FnOnce(Credential) -> S,
    S: ProjectSource,
    W: Write,
{
    if config.stored_token().is_some() {
        o_warn!("Ignoring the token stored in the config file; enter it at the prompt");
    }

    let token = credentials.acquire()?;
    let source = connect(token);
    let outcome = match source.list_projects().await {
        Ok(projects) => {
            writeln!(out, "{}", projects).context("Failed to write output")?;
            Outcome::Listed(projects.len())
        }
        Err(e) => {
            writeln!(out, "{:#}", e).context("Failed to write output")?;
            writeln!(out, "{}", FAILURE_HINT).context("Failed to write output")?;
            Outcome::Failed
        }
    };
    out.flush().context("Failed to write output")?;
    Ok(outcome)
}
