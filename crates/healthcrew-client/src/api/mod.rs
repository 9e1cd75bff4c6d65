//! Service facades.

mod agent;
mod crew;

pub use agent::AgentClient;
pub use crew::CrewClient;
