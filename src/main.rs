//! usercheck — fetch user records and validate them.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use usercheck::config::Config;
use usercheck::constants;
use usercheck::env::Env;
use usercheck::fetch::HttpFetcher;
use usercheck::runner;

use cli::args::{CheckArgs, Cli, Command, ConfigArgs};

#[tokio::main]
async fn main() {
    cli::init_logging();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => run_check(args).await,
        Command::Config(args) => run_config(args),
        Command::Version => run_version(),
    }
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}           {}", "target:".dimmed(), constants::TARGET);
    println!("{} {}", "default endpoint:".dimmed(), constants::DEFAULT_ENDPOINT);
    Ok(())
}

/// Print the effective configuration.
fn run_config(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args.path)?;
    config.check().context("invalid configuration")?;
    print!("{}", config.to_toml().context("failed to render configuration")?);
    Ok(())
}

/// Fetch the user list and validate it.
async fn run_check(args: CheckArgs) -> Result<()> {
    let mut config = load_config(&args.path)?;
    args.apply(&mut config);
    config.check().context("invalid command-line options")?;

    let fetcher = HttpFetcher::new(&config.fetch).context("failed to set up HTTP client")?;
    let outcome = runner::run_check(&fetcher, config.validate.mode)
        .await
        .context("failed to fetch user records")?;

    let report = &outcome.report;
    if !(args.quiet && report.passed()) {
        print!("{}", args.format.render(&outcome));
    }

    if let Some(first) = report.first_violation() {
        let count = report.violations.len();
        if count == 1 {
            bail!("validation failed: {first}");
        }
        bail!("validation failed with {count} violations, first: {first}");
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    let work_dir = std::fs::canonicalize(path)
        .with_context(|| format!("--path directory not found: {}", path.display()))?;
    Config::load(Some(&work_dir), &Env::real()).context("failed to load configuration")
}
