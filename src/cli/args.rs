//! Clap argument types and config overrides.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use usercheck::config::Config;
use usercheck::constants::ENV_FORMAT;
use usercheck::models::ValidationMode;
use usercheck::output::OutputRenderer;
use usercheck::runner::CheckOutcome;

/// Fetch user records from an HTTP API and validate their shape and invariants.
#[derive(Parser, Debug)]
#[command(name = "usercheck", version = usercheck::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch the user list and validate every record.
    Check(CheckArgs),

    /// Print the effective configuration as TOML.
    Config(ConfigArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Directory to look for `.usercheck.toml` in (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory to look for `.usercheck.toml` in (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// URL returning the JSON user list.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Stop at the first violation, or report all of them.
    #[arg(long, value_enum)]
    pub mode: Option<ValidationMode>,

    /// Output format.
    #[arg(long, env = ENV_FORMAT, default_value = "terminal")]
    pub format: OutputFormat,

    /// Print nothing when every record is valid.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl CheckArgs {
    /// Layer CLI flags over the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref endpoint) = self.endpoint {
            config.fetch.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout {
            config.fetch.timeout_secs = secs;
        }
        if let Some(mode) = self.mode {
            config.validate.mode = mode;
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the outcome using the renderer for this format.
    pub fn render(&self, outcome: &CheckOutcome) -> String {
        match self {
            OutputFormat::Terminal => usercheck::output::terminal::TerminalRenderer.render(outcome),
            OutputFormat::Json => usercheck::output::json::JsonRenderer.render(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usercheck::models::ValidationReport;

    fn parse_check(args: &[&str]) -> CheckArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Check(args) => args,
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn check_defaults() {
        let args = parse_check(&["usercheck", "check"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.endpoint.is_none());
        assert!(args.timeout.is_none());
        assert!(args.mode.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn check_flags_parse() {
        let args = parse_check(&[
            "usercheck",
            "check",
            "--endpoint",
            "http://localhost:3000/users",
            "--timeout",
            "3",
            "--mode",
            "collect-all",
            "--format",
            "json",
            "-q",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:3000/users"));
        assert_eq!(args.timeout, Some(3));
        assert_eq!(args.mode, Some(ValidationMode::CollectAll));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.quiet);
    }

    #[test]
    fn invalid_mode_is_rejected() {
        assert!(Cli::try_parse_from(["usercheck", "check", "--mode", "lenient"]).is_err());
    }

    #[test]
    fn apply_overrides_config() {
        let args = parse_check(&[
            "usercheck",
            "check",
            "--endpoint",
            "http://mirror.local/users",
            "--mode",
            "collect-all",
        ]);
        let mut config = Config::default();
        config.fetch.timeout_secs = 30;
        args.apply(&mut config);
        assert_eq!(config.fetch.endpoint, "http://mirror.local/users");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.validate.mode, ValidationMode::CollectAll);
    }

    #[test]
    fn endpoint_flag_overrides_invalid_loaded_endpoint() {
        let args = parse_check(&[
            "usercheck",
            "check",
            "--endpoint",
            "https://example.test/users",
        ]);
        let mut config = Config::default();
        config.fetch.endpoint = "ftp://bad".to_string();
        assert!(config.check().is_err());

        args.apply(&mut config);
        assert!(config.check().is_ok());
    }

    #[test]
    fn version_subcommand_parses() {
        let cli = Cli::try_parse_from(["usercheck", "version"]).unwrap();
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn output_format_render_json() {
        let outcome = CheckOutcome {
            origin: "fixture".into(),
            report: ValidationReport {
                mode: ValidationMode::FailFast,
                total: 0,
                checked: 0,
                valid: vec![],
                violations: vec![],
            },
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(&outcome)).unwrap();
        assert_eq!(parsed["passed"], true);
        assert!(!OutputFormat::Terminal.render(&outcome).is_empty());
    }
}
