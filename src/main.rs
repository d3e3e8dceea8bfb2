use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;

#[macro_use]
mod output;

mod api;
mod config;
mod prompt;
mod session;
mod types;

use api::TodoistClient;
use prompt::{HiddenPrompt, Prompt};
use session::Outcome;
use types::Credential;

/// List the projects of the Todoist account behind an API token.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (default: ./api_key.ini, then the user config dir)
    #[arg(short, long, env = "TODO_CONFIG")]
    config: Option<String>,

    /// Base URL of the Todoist API
    #[arg(long, env = "TODOIST_API_URL")]
    api_url: Option<String>,

    /// Do not echo the token while typing it
    #[arg(long)]
    hide_input: bool,

    /// Print debug information
    #[arg(short, long)]
    verbose: bool,

    /// Hide warnings; only the prompt, results and errors are printed
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    output::init(output::Verbosity::from_flags(cli.verbose, cli.quiet));

    let path = config::resolve_path(cli.config.as_deref());
    let cfg = config::load(&path);
    if cfg.is_empty() {
        o_debug!("Config is empty");
    }
    if cfg.color() == Some(false) {
        colored::control::set_override(false);
    }

    let base_url = cli
        .api_url
        .clone()
        .or_else(|| cfg.api_url().map(str::to_string))
        .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string());
    o_debug!("Using API at {}", base_url.cyan());

    let connect = |token: Credential| TodoistClient::new(&base_url, token);
    let mut out = io::stdout();
    let result = if cli.hide_input {
        session::run(&cfg, &mut HiddenPrompt, connect, &mut out).await
    } else {
        session::run(&cfg, &mut Prompt::stdin(), connect, &mut out).await
    };

    // A failed query has already been reported and still exits 0.
    match result {
        Ok(Outcome::Listed(count)) => o_debug!("Listed {} projects", count),
        Ok(Outcome::Failed) => o_debug!("Query failed"),
        Err(e) => {
            o_error!("{}: {:#}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
