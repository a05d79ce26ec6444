//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an API error from response details.
    pub fn api(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: Option<String>,
    ) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            request_id,
        }
    }

    /// The server's machine-readable error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint_for(cli_err) {
            eprintln!("\n{}", hint.yellow());
        }
        if let CliError::Api {
            request_id: Some(request_id),
            ..
        } = cli_err
        {
            eprintln!("\nRequest ID: {}", request_id);
        }
    }
}

fn hint_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Api { code, .. } if code == "insufficient_capacity" => {
            Some("Hint: Add classrooms with `seatctl rooms add` or lower the student count.")
        }
        CliError::Api { code, .. } if code == "duplicate_room" => {
            Some("Hint: Room IDs must be unique. See `seatctl rooms list`.")
        }
        CliError::NotFound(_) => Some("Hint: List known rooms with `seatctl rooms list`."),
        CliError::Network(_) => {
            Some("Hint: Check that seatplan-server is running and --api-url is correct.")
        }
        _ => None,
    }
}
