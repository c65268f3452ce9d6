//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::app::api::{self, AggregateRequest, DegradedSource};
use crate::app::config::{load_config, load_dotenv};
use crate::app::logging::init_logging;
use crate::domain::{AppError, DevsumConfig};

#[derive(Parser)]
#[command(name = "devsum")]
#[command(version)]
#[command(
    about = "Aggregate public developer profiles and summarize them with Gemini",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file (defaults to ./devsum.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a LeetCode profile as GraphQL JSON
    #[clap(visible_alias = "lc")]
    Leetcode {
        /// LeetCode username
        username: String,
    },
    /// Print a GitHub profile and repository listing as JSON
    #[clap(visible_alias = "gh")]
    Github {
        /// GitHub username
        username: String,
    },
    /// Print a best-effort GeeksforGeeks profile as JSON
    #[clap(visible_alias = "gfg")]
    Geeks {
        /// GeeksforGeeks username
        username: String,
    },
    /// Aggregate profiles and print an AI summary as JSON
    #[clap(visible_alias = "s")]
    Summary(ProfileArgs),
    /// Print the summary prompt without contacting Gemini
    #[clap(visible_alias = "p")]
    Prompt(ProfileArgs),
}

#[derive(Args)]
struct ProfileArgs {
    /// GitHub username
    github_username: String,
    /// LeetCode username
    leetcode_username: String,
    /// Optional GeeksforGeeks username
    #[arg(long)]
    geeks: Option<String>,
}

impl ProfileArgs {
    fn request(&self) -> AggregateRequest<'_> {
        AggregateRequest {
            github: &self.github_username,
            leetcode: &self.leetcode_username,
            geeks: self.geeks.as_deref(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    load_dotenv();

    let result: Result<i32, AppError> =
        load_config(cli.config.as_deref()).and_then(|config| dispatch(cli.command, &config));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}

fn dispatch(command: Commands, config: &DevsumConfig) -> Result<i32, AppError> {
    match command {
        Commands::Leetcode { username } => {
            print_json(&api::leetcode(&username, config)?)?;
            Ok(0)
        }
        Commands::Github { username } => {
            let lookup = api::github(&username, config)?;
            print_json(&lookup)?;
            Ok(if lookup.has_profile() { 0 } else { 1 })
        }
        Commands::Geeks { username } => {
            print_json(&api::geeks(&username, config)?)?;
            Ok(0)
        }
        Commands::Summary(args) => {
            let outcome = api::summary(args.request(), config)?;
            report_degraded(&outcome.degraded);
            print_json(&outcome)?;
            Ok(0)
        }
        Commands::Prompt(args) => {
            let preview = api::prompt(args.request(), config)?;
            report_degraded(&preview.degraded);
            println!("{}", preview.prompt);
            Ok(0)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_degraded(degraded: &[DegradedSource]) {
    for source in degraded {
        eprintln!("⚠️  {}", source.to_error());
    }
}
