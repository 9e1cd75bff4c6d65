//! CLI command handlers.

use anyhow::Result;
use healthcrew_client::{AgentClient, ClientConfig, CrewClient};

pub mod chat;
pub mod crew_info;
pub mod demo;
pub mod meal_plan;
pub mod nutrition;
pub mod plan;
pub mod process;
pub mod status;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// General service settings.
    pub agent: ClientConfig,
    /// CrewAI service settings.
    pub crew: ClientConfig,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build a client for the general service.
    pub fn agent_client(&self) -> Result<AgentClient> {
        Ok(AgentClient::from_config(self.agent.clone())?)
    }

    /// Build a client for the CrewAI service.
    pub fn crew_client(&self) -> Result<CrewClient> {
        Ok(CrewClient::from_config(self.crew.clone())?)
    }
}
