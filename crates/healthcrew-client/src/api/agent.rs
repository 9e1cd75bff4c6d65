//! General multi-agent service.

use std::time::Duration;

use crate::client::{ClientBuilder, Service, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{
    ConversationReply, ConversationRequest, FoodRecognition, FoodRecognitionRequest,
    HealthGoalRequest, JsonObject, MealPlanRequest, NutritionRequest, RecommendationRequest,
};

/// Client for the general multi-agent service.
///
/// Loosely shaped results (health, nutrition, goals, meal plans,
/// recommendations) come back as [`JsonObject`].
///
/// # Example
///
/// ```no_run
/// use healthcrew_client::{AgentClient, ConversationRequest};
///
/// # async fn example() -> healthcrew_client::Result<()> {
/// let client = AgentClient::builder()
///     .base_url("http://localhost:5000")
///     .build()?;
///
/// let reply = client
///     .chat(&ConversationRequest::new(1, "demo-001", "How do I lose weight?"))
///     .await?;
/// println!("{}", reply.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AgentClient {
    transport: Transport,
}

impl Service for AgentClient {
    fn defaults() -> ClientConfig {
        ClientConfig::agent_defaults()
    }

    fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

impl AgentClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder<Self> {
        ClientBuilder::new()
    }

    /// Create a client from explicit settings.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config).build()
    }

    /// Create a client with default settings pointing to localhost.
    pub fn localhost() -> Result<Self> {
        Self::builder().build()
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Change the request timeout for subsequent calls.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.transport.set_timeout(timeout);
    }

    /// Check service health.
    pub async fn health_check(&self) -> Result<JsonObject> {
        self.transport.get("/health").await
    }

    /// Simple connectivity check - returns true if the service answered.
    pub async fn is_healthy(&self) -> bool {
        self.health_check().await.is_ok()
    }

    /// Recognize a food and estimate its nutrition facts.
    pub async fn recognize_food(&self, request: &FoodRecognitionRequest) -> Result<FoodRecognition> {
        self.transport.post("/food/recognize", request).await
    }

    /// Analyze the nutrition of a food against the day's intake.
    pub async fn analyze_nutrition(&self, request: &NutritionRequest) -> Result<JsonObject> {
        self.transport.post("/nutrition/analyze", request).await
    }

    /// Send a conversation message.
    pub async fn chat(&self, request: &ConversationRequest) -> Result<ConversationReply> {
        self.transport.post("/chat", request).await
    }

    /// Send a message without context (convenience method).
    pub async fn ask(
        &self,
        user_id: i64,
        session_id: &str,
        message: impl Into<String>,
    ) -> Result<ConversationReply> {
        self.chat(&ConversationRequest::new(user_id, session_id, message))
            .await
    }

    /// Analyze progress towards a health goal.
    pub async fn analyze_health_goal(&self, request: &HealthGoalRequest) -> Result<JsonObject> {
        self.transport.post("/health-goal/analyze", request).await
    }

    /// Generate a meal plan.
    pub async fn generate_meal_plan(&self, request: &MealPlanRequest) -> Result<JsonObject> {
        self.transport.post("/meal-plan", request).await
    }

    /// Fetch community recommendations.
    pub async fn recommendations(&self, request: &RecommendationRequest) -> Result<JsonObject> {
        self.transport.post("/recommendations", request).await
    }
}
