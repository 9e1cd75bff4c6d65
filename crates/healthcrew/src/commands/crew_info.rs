//! Crew info command.

use anyhow::Result;
use clap::Args;

use super::Context;
use crate::output;

/// Arguments for the crew-info command.
#[derive(Args, Debug)]
pub struct CrewInfoArgs {
    /// Show per-agent tool details
    #[arg(short, long)]
    pub detailed: bool,
}

/// Run the crew-info command.
pub async fn run(args: CrewInfoArgs, ctx: &Context) -> Result<()> {
    let response = ctx.crew_client()?.crew_info().await?;
    if ctx.json_output {
        return output::print_json(&response);
    }

    let info = output::expect_success(response)?;
    output::header("Crew");
    output::field("Framework", &info.framework);
    output::field("Agents", info.agents_count);
    for agent in &info.agents {
        println!("    - {agent}");
        if args.detailed {
            if let Some(detail) = info.agent_details.get(agent) {
                println!("      {} ({} tools)", detail.role, detail.tools_count);
            }
        }
    }
    if !info.features.is_empty() {
        output::field("Features", "");
        for feature in &info.features {
            println!("    - {feature}");
        }
    }
    println!();

    Ok(())
}
