//! Process command - route one free-form request through the whole crew.

use anyhow::{Context as _, Result, bail};
use clap::Args;
use healthcrew_client::{JsonObject, ProcessRequest};

use super::Context;
use crate::output;

/// Arguments for the process command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// What to ask the crew
    #[arg(required = true)]
    pub message: String,

    /// User ID
    #[arg(short, long, default_value_t = 1)]
    pub user: i64,

    /// Extra context as a JSON object, e.g. '{"target_calories": 1800}'
    #[arg(long)]
    pub context_json: Option<String>,
}

/// Run the process command.
pub async fn run(args: ProcessArgs, ctx: &Context) -> Result<()> {
    let context = args
        .context_json
        .as_deref()
        .map(parse_context)
        .transpose()?;
    let request = ProcessRequest {
        message: args.message,
        user_id: args.user,
        context,
    };

    let response = ctx.crew_client()?.process(&request).await?;
    if ctx.json_output {
        return output::print_json(&response);
    }

    let outcome = output::expect_success(response)?;
    output::header("Crew Workflow");
    output::field("Scenario", &outcome.scenario);
    if !outcome.coordinated_agents.is_empty() {
        output::field("Agents", outcome.coordinated_agents.join(", "));
    }
    if let Some(tasks) = outcome.tasks_executed {
        output::field("Tasks", tasks);
    }
    println!();
    println!("{}", outcome.response);

    Ok(())
}

fn parse_context(raw: &str) -> Result<JsonObject> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("--context-json is not valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("--context-json must be a JSON object"),
    }
}
