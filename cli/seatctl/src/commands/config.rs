//! Saved settings commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{print_info, print_json, print_success, OutputFormat};

use super::CommandContext;

/// Show or change saved CLI settings.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective settings.
    Show,

    /// Save the API URL used when --api-url is not given.
    SetApiUrl {
        /// Base URL of seatplan-server, e.g. http://localhost:8080.
        url: String,
    },
}

#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    api_url: &'a str,
    saved_api_url: Option<&'a str>,
}

impl ConfigCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetApiUrl { url } => set_api_url(ctx, url),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        api_url: &ctx.api_url,
        saved_api_url: ctx.config.api_url.as_deref(),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Table => {
            println!("api_url: {}", view.api_url);
            println!("saved api_url: {}", view.saved_api_url.unwrap_or("-"));
        }
    }
    Ok(())
}

fn set_api_url(mut ctx: CommandContext, url: String) -> Result<()> {
    reqwest::Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid URL '{url}': {e}"))?;

    ctx.config.api_url = Some(url.trim_end_matches('/').to_string());
    let path = ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "api_url": ctx.config.api_url })),
        OutputFormat::Table => {
            print_success("Saved API URL");
            print_info(&format!("Config written to {}", path.display()));
        }
    }
    Ok(())
}
