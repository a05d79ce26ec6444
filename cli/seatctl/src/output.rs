//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Render rows as a table.
pub fn render_table<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table.with(Style::rounded());
    table.to_string()
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", render_table(data));
            }
        }
        OutputFormat::Json => print_json(&data),
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Room")]
        room: &'static str,
        #[tabled(rename = "Seats")]
        seats: u32,
    }

    #[test]
    fn test_render_table_has_headers_and_rows() {
        colored::control::set_override(false);
        let rendered = render_table(&[Row { room: "A-101", seats: 30 }]);
        assert!(rendered.contains("Room"));
        assert!(rendered.contains("Seats"));
        assert!(rendered.contains("A-101"));
        assert!(rendered.contains("30"));
    }
}
