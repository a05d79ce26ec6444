//! CLI commands.

mod allocate;
mod config;
mod rooms;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::OutputFormat;

/// seatctl - manage exam rooms and allocate seats.
#[derive(Debug, Parser)]
#[command(name = "seatctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Seat planner API URL.
    #[arg(long, global = true, env = "SEATCTL_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage classrooms in the room catalog.
    Rooms(rooms::RoomsCommand),

    /// Allocate exam seats for a number of students.
    Allocate(allocate::AllocateCommand),

    /// Show or change saved CLI settings.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let api_url = config.resolve_api_url(self.api_url.as_deref());

        let ctx = CommandContext {
            config,
            api_url,
            format: self.format,
        };

        match self.command {
            Commands::Rooms(cmd) => cmd.run(ctx).await,
            Commands::Allocate(cmd) => cmd.run(ctx).await,
            Commands::Config(cmd) => cmd.run(ctx).await,
            Commands::Version => {
                println!("seatctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub api_url: String,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Get an API client for the resolved endpoint.
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_allocate() {
        let cli = Cli::try_parse_from(["seatctl", "--format", "json", "allocate", "50"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Allocate(_)));
    }

    #[test]
    fn test_parse_rooms_add() {
        let cli = Cli::try_parse_from([
            "seatctl",
            "rooms",
            "add",
            "A-101",
            "--capacity",
            "30",
            "--floor",
            "-1",
            "--near-washroom",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Rooms(_)));
    }

    #[test]
    fn test_rooms_add_rejects_bad_room_id() {
        let result =
            Cli::try_parse_from(["seatctl", "rooms", "add", "A 101", "--capacity", "30", "--floor", "1"]);
        assert!(result.is_err());
    }
}
