//! CrewAI service.

use crate::client::{ClientBuilder, Service, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{
    ApiResponse, ConversationRequest, CrewConversation, CrewInfo, CrewMealPlan,
    CrewMealPlanRequest, CrewNutrition, CrewNutritionRequest, Goal, HealthPlanRequest, JsonObject,
    ProcessOutcome, ProcessRequest,
};

/// Session used by [`CrewClient::quick_chat`].
const QUICK_SESSION: &str = "quick_session";

/// Plan length used by [`CrewClient::simple_health_plan`].
const SIMPLE_PLAN_DAYS: u32 = 7;

/// Client for the CrewAI service.
///
/// Every operation except the health check returns an [`ApiResponse`]
/// envelope; check `success` before reading `data`. The timeout is fixed
/// when the client is built.
///
/// # Example
///
/// ```no_run
/// use healthcrew_client::{CrewClient, Goal, HealthPlanRequest};
///
/// # async fn example() -> healthcrew_client::Result<()> {
/// let client = CrewClient::localhost()?;
///
/// let plan = client
///     .create_health_plan(&HealthPlanRequest::new(1001, Goal::WeightLoss, 1800, 7))
///     .await?;
/// if plan.success {
///     println!("{:?}", plan.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CrewClient {
    transport: Transport,
}

impl Service for CrewClient {
    fn defaults() -> ClientConfig {
        ClientConfig::crew_defaults()
    }

    fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

impl CrewClient {
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

    /// Check service health.
    pub async fn health_check(&self) -> Result<JsonObject> {
        self.transport.get("/crewai/health").await
    }

    /// Simple connectivity check - returns true if the service answered.
    pub async fn is_healthy(&self) -> bool {
        self.health_check().await.is_ok()
    }

    /// Create a complete health plan through the whole crew.
    pub async fn create_health_plan(
        &self,
        request: &HealthPlanRequest,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.transport.post("/crewai/health-plan", request).await
    }

    /// Create a 7-day plan from the required fields only.
    pub async fn simple_health_plan(
        &self,
        user_id: i64,
        goal: Goal,
        target_calories: u32,
    ) -> Result<ApiResponse<serde_json::Value>> {
        self.create_health_plan(&HealthPlanRequest::new(
            user_id,
            goal,
            target_calories,
            SIMPLE_PLAN_DAYS,
        ))
        .await
    }

    /// Send a conversation message.
    pub async fn chat(
        &self,
        request: &ConversationRequest,
    ) -> Result<ApiResponse<CrewConversation>> {
        self.transport.post("/crewai/conversation", request).await
    }

    /// Send a message in the shared quick session (convenience method).
    pub async fn quick_chat(
        &self,
        user_id: i64,
        message: impl Into<String>,
    ) -> Result<ApiResponse<CrewConversation>> {
        self.chat(&ConversationRequest::new(user_id, QUICK_SESSION, message))
            .await
    }

    /// Generate a meal plan.
    pub async fn generate_meal_plan(
        &self,
        request: &CrewMealPlanRequest,
    ) -> Result<ApiResponse<CrewMealPlan>> {
        self.transport.post("/crewai/meal-plan", request).await
    }

    /// Analyze the nutrition of a food.
    pub async fn analyze_nutrition(
        &self,
        request: &CrewNutritionRequest,
    ) -> Result<ApiResponse<CrewNutrition>> {
        self.transport
            .post("/crewai/nutrition-analysis", request)
            .await
    }

    /// Get the crew composition.
    pub async fn crew_info(&self) -> Result<ApiResponse<CrewInfo>> {
        self.transport.get("/crewai/crew-info").await
    }

    /// Route a free-form request through the crew workflow.
    pub async fn process(&self, request: &ProcessRequest) -> Result<ApiResponse<ProcessOutcome>> {
        self.transport.post("/crewai/process", request).await
    }
}
