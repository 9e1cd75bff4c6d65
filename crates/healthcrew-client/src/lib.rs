//! HTTP client SDK for the multi-agent health-planning service.
//!
//! Two facades share one transport:
//!
//! - [`AgentClient`]: the general multi-agent service (food recognition,
//!   nutrition analysis, chat, goal analysis, meal plans, recommendations).
//! - [`CrewClient`]: the CrewAI service (health plans, conversation, meal
//!   plans, nutrition analysis, crew info, unified processing).
//!
//! Each call is one HTTP round trip. Network and decode failures are
//! returned as [`Error`]; a service answering `success: false` is not an
//! error and comes back as a normal [`ApiResponse`].
//!
//! # Example
//!
//! ```no_run
//! use healthcrew_client::{ConversationRequest, CrewClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = CrewClient::builder()
//!     .base_url("http://localhost:5001")
//!     .build()?;
//!
//! if client.is_healthy().await {
//!     println!("Crew is up!");
//! }
//!
//! let reply = client
//!     .chat(&ConversationRequest::new(1001, "session-1", "Plan my week"))
//!     .await?;
//! match reply.data {
//!     Some(data) if reply.success => println!("{}", data.response),
//!     _ => println!("failed: {}", reply.error.unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use api::{AgentClient, CrewClient};
pub use client::{ClientBuilder, Service, Transport};
pub use config::{ClientConfig, EndpointConfig, ServiceConfig};
pub use error::{Error, Result};
pub use types::*;
