//! Chat command - one conversation message to either service.

use anyhow::Result;
use clap::Args;
use console::Style;
use healthcrew_client::ConversationRequest;

use super::Context;
use crate::output;

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    #[arg(required = true)]
    pub message: String,

    /// Conversation session
    #[arg(short, long, default_value = "cli-session")]
    pub session: String,

    /// User ID
    #[arg(short, long, default_value_t = 1)]
    pub user: i64,

    /// Ask the CrewAI service instead of the general service
    #[arg(long)]
    pub crew: bool,
}

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let request = ConversationRequest::new(args.user, args.session, args.message);
    let dim = Style::new().dim();

    if args.crew {
        let client = ctx.crew_client()?;
        if ctx.verbose {
            println!("{}", dim.apply_to(format!("Sending to: {}", ctx.crew.base_url)));
        }

        let response = client.chat(&request).await?;
        if ctx.json_output {
            return output::print_json(&response);
        }

        let data = output::expect_success(response)?;
        println!("{}", data.response);
        if ctx.verbose {
            println!(
                "{}",
                dim.apply_to(format!("[session {} · {}]", data.session_id, data.framework))
            );
        }
    } else {
        let client = ctx.agent_client()?;
        if ctx.verbose {
            println!("{}", dim.apply_to(format!("Sending to: {}", ctx.agent.base_url)));
        }

        let reply = client.chat(&request).await?;
        if ctx.json_output {
            return output::print_json(&reply);
        }
        println!("{}", reply.response);
    }

    Ok(())
}
