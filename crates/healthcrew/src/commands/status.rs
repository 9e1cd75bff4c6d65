//! Status command - shows whether both services are reachable.

use anyhow::Result;
use clap::Args;
use console::Style;
use healthcrew_client::JsonObject;
use serde::Serialize;

use super::Context;
use crate::output;

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the full health payload of each service
    #[arg(short, long)]
    pub detailed: bool,
}

/// Status of one service for JSON output.
#[derive(Debug, Serialize)]
struct ServiceStatus {
    url: String,
    running: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    health: Option<JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_result(url: &str, result: healthcrew_client::Result<JsonObject>) -> Self {
        match result {
            Ok(health) => Self {
                url: url.to_string(),
                running: true,
                health: Some(health),
                error: None,
            },
            Err(e) => Self {
                url: url.to_string(),
                running: false,
                health: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Status response for JSON output.
#[derive(Debug, Serialize)]
struct StatusOutput {
    agent: ServiceStatus,
    crew: ServiceStatus,
}

/// Run the status command.
pub async fn run(args: StatusArgs, ctx: &Context) -> Result<()> {
    let agent = ctx.agent_client()?;
    let crew = ctx.crew_client()?;

    let (agent_health, crew_health) = tokio::join!(agent.health_check(), crew.health_check());

    let status = StatusOutput {
        agent: ServiceStatus::from_result(&ctx.agent.base_url, agent_health),
        crew: ServiceStatus::from_result(&ctx.crew.base_url, crew_health),
    };

    if ctx.json_output {
        return output::print_json(&status);
    }

    output::header("Health Service Status");
    print_service("General", &status.agent, args.detailed, ctx.verbose)?;
    print_service("CrewAI", &status.crew, args.detailed, ctx.verbose)?;
    println!();

    Ok(())
}

fn print_service(name: &str, status: &ServiceStatus, detailed: bool, verbose: bool) -> Result<()> {
    let state = if status.running {
        Style::new().green().apply_to("● running")
    } else {
        Style::new().red().apply_to("● not running")
    };

    println!();
    output::field(name, state);
    output::field("  Server", &status.url);

    if let Some(health) = &status.health {
        if let Some(value) = health.get("status").and_then(|v| v.as_str()) {
            output::field("  Reported", value);
        }
        if detailed {
            output::block("  Payload", &serde_json::Value::Object(health.clone()))?;
        }
    }

    if verbose {
        if let Some(error) = &status.error {
            output::field("  Error", error);
        }
    }

    Ok(())
}
