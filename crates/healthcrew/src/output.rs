//! Console output helpers shared by the commands.

use anyhow::Result;
use console::{Style, style};
use healthcrew_client::ApiResponse;
use serde::Serialize;

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bold section title with a rule underneath.
pub fn header(title: &str) {
    let dim = Style::new().dim();
    println!();
    println!("{}", style(title).bold());
    println!("{}", dim.apply_to("─".repeat(40)));
}

/// Print one `label: value` line.
pub fn field(label: &str, value: impl std::fmt::Display) {
    let dim = Style::new().dim();
    println!("  {} {}", dim.apply_to(format!("{label}:")), value);
}

/// Print a JSON value indented under a label.
pub fn block(label: &str, value: &serde_json::Value) -> Result<()> {
    let dim = Style::new().dim();
    println!("  {}", dim.apply_to(format!("{label}:")));
    for line in serde_json::to_string_pretty(value)?.lines() {
        println!("    {line}");
    }
    Ok(())
}

/// Print a success marker.
pub fn ok(message: &str) {
    println!("{} {}", Style::new().green().apply_to("✓"), message);
}

/// Print a failure marker to stderr.
pub fn failed(message: impl std::fmt::Display) {
    eprintln!("{} {}", Style::new().red().apply_to("✗"), message);
}

/// Unwrap a crew envelope, turning `success: false` into an error.
pub fn expect_success<T>(response: ApiResponse<T>) -> Result<T> {
    Ok(response.into_data()?)
}
