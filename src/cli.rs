//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rabt-onboard", version, about = "RABT Marketing client onboarding")]
pub struct Cli {
    /// Config file to use instead of the platform config path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the onboarding form in the terminal (default)
    Tui,
    /// Serve the onboarding notification endpoint
    ServeNotify {
        /// Bind address, overrides the configured one
        #[arg(long, value_name = "HOST:PORT")]
        addr: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::parse_from(["rabt-onboard"]);
        assert_eq!(cli.command(), Command::Tui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_serve_notify_with_addr_and_global_config() {
        let cli = Cli::parse_from([
            "rabt-onboard",
            "serve-notify",
            "--addr",
            "0.0.0.0:8080",
            "--config",
            "/tmp/rabt.json",
        ]);
        assert_eq!(
            cli.command(),
            Command::ServeNotify {
                addr: Some("0.0.0.0:8080".to_string())
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rabt.json")));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["rabt-onboard", "deploy"]).is_err());
    }
}
