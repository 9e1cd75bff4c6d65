//! Request and response types for the health-planning services.
//!
//! These types mirror the services' JSON contract. Free-form payloads use
//! [`JsonObject`] so unknown shapes survive decoding untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Open-schema JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────────────────────────────────────

/// Health goal understood by the planning agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Reduce body weight.
    WeightLoss,
    /// Build muscle mass.
    MuscleGain,
    /// Keep current condition.
    HealthMaintenance,
}

impl Goal {
    /// Wire name of the goal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::HealthMaintenance => "health_maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "health_maintenance" => Ok(Goal::HealthMaintenance),
            other => Err(format!(
                "unknown goal '{other}' (expected weight_loss, muscle_gain or health_maintenance)"
            )),
        }
    }
}

/// Response envelope used by the crew service.
///
/// `data` is only trustworthy when `success` is true; on failure the
/// service fills `error` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the service completed the request.
    pub success: bool,
    /// Operation-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure description set when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Turn an application-level failure into an [`Error::Application`].
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(Error::Application(
                self.error
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| Error::Application("response carried no data".to_string()))
    }
}

/// Conversation request (both services).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRequest {
    /// User identifier.
    pub user_id: i64,
    /// Conversation session identifier.
    pub session_id: String,
    /// User message.
    pub message: String,
    /// Extra context for the agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonObject>,
}

impl ConversationRequest {
    /// Create a request without context.
    pub fn new(user_id: i64, session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id,
            session_id: session_id.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Attach context.
    pub fn with_context(mut self, context: JsonObject) -> Self {
        self.context = Some(context);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// General service
// ─────────────────────────────────────────────────────────────────────────────

/// Food recognition request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecognitionRequest {
    /// Path of the image on the service host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Food name, when already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
}

/// Food recognition result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecognition {
    /// Recognized food.
    pub food_name: String,
    /// Energy in kcal.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrate in grams.
    pub carbohydrate: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Recognition confidence, 0..1.
    pub confidence: f64,
    /// Fiber in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Serving size description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Food category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// Any other keys the service returned.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Nutrition analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRequest {
    /// Nutrition facts of the food being analyzed.
    pub food_data: JsonObject,
    /// Food already eaten today.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub daily_intake: Vec<JsonObject>,
    /// User profile (age, weight, activity...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<JsonObject>,
}

/// Conversational reply from the general service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationReply {
    /// Assistant response text.
    #[serde(default)]
    pub response: String,
    /// Session the reply belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Any other keys the service returned.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Health goal progress analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoalRequest {
    /// Goal being tracked.
    pub goal_type: Goal,
    /// Latest measurement, e.g. `{"value": 75.0}`.
    pub current_data: JsonObject,
    /// Earlier measurements, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_data: Vec<JsonObject>,
    /// Target, e.g. `{"value": 70.0, "deadline": "2025-02-01"}`.
    pub target: JsonObject,
}

/// Meal plan request (general service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Daily calorie target.
    pub target_calories: u32,
    /// Goal the plan serves.
    pub goal: Goal,
    /// Number of days to plan.
    pub days: u32,
    /// Preferred styles, e.g. "high protein".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_preferences: Vec<String>,
    /// Foods or styles to avoid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
}

impl MealPlanRequest {
    /// Create a request without preferences or restrictions.
    pub fn new(goal: Goal, target_calories: u32, days: u32) -> Self {
        Self {
            target_calories,
            goal,
            days,
            dietary_preferences: Vec::new(),
            restrictions: Vec::new(),
        }
    }
}

/// Community recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// User identifier.
    pub user_id: i64,
    /// What to recommend, e.g. "posts" or "recipes".
    pub recommendation_type: String,
    /// Past interactions of the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_history: Vec<JsonObject>,
    /// Extra context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonObject>,
}

impl RecommendationRequest {
    /// Create a request for one recommendation type.
    pub fn new(user_id: i64, recommendation_type: impl Into<String>) -> Self {
        Self {
            user_id,
            recommendation_type: recommendation_type.into(),
            user_history: Vec::new(),
            context: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crew service
// ─────────────────────────────────────────────────────────────────────────────

/// Full health plan request, handled by the whole crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPlanRequest {
    /// User identifier.
    pub user_id: i64,
    /// Goal of the plan.
    pub goal: Goal,
    /// Current weight in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Target weight in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Daily calorie target.
    pub target_calories: u32,
    /// Plan length in days.
    pub days: u32,
    /// Preferred styles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_preferences: Vec<String>,
    /// Foods or styles to avoid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
    /// Food to analyze as part of the plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
}

impl HealthPlanRequest {
    /// Create a request with only the required fields.
    pub fn new(user_id: i64, goal: Goal, target_calories: u32, days: u32) -> Self {
        Self {
            user_id,
            goal,
            current_weight: None,
            target_weight: None,
            target_calories,
            days,
            dietary_preferences: Vec::new(),
            restrictions: Vec::new(),
            food_name: None,
        }
    }

    /// Set current and target weight.
    pub fn with_weights(mut self, current: f64, target: f64) -> Self {
        self.current_weight = Some(current);
        self.target_weight = Some(target);
        self
    }

    /// Add dietary preferences.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_preferences
            .extend(preferences.into_iter().map(Into::into));
        self
    }

    /// Add restrictions.
    pub fn with_restrictions<I, S>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrictions
            .extend(restrictions.into_iter().map(Into::into));
        self
    }
}

/// Crew conversation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewConversation {
    /// Assistant response text.
    #[serde(default)]
    pub response: String,
    /// Session the reply belongs to.
    #[serde(default)]
    pub session_id: String,
    /// Framework that produced the reply.
    #[serde(default)]
    pub framework: String,
}

/// Crew meal plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMealPlanRequest {
    /// User identifier.
    pub user_id: i64,
    /// Daily calorie target.
    pub target_calories: u32,
    /// Number of days to plan.
    pub days: u32,
    /// Goal the plan serves.
    pub goal: Goal,
    /// Preferred styles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_preferences: Vec<String>,
    /// Foods or styles to avoid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
}

/// Crew meal plan payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMealPlan {
    /// The plan itself; shape is decided by the planner agent.
    #[serde(default)]
    pub meal_plan: serde_json::Value,
    /// Number of days planned.
    #[serde(default)]
    pub days: u32,
    /// Daily calorie target used.
    #[serde(default)]
    pub target_calories: u32,
    /// Framework that produced the plan.
    #[serde(default)]
    pub framework: String,
}

/// Crew nutrition analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewNutritionRequest {
    /// Food to analyze.
    pub food_name: String,
    /// User identifier.
    pub user_id: i64,
    /// Goal to judge the food against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}

/// Crew nutrition analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewNutrition {
    /// Analysis; shape is decided by the analyzer agent.
    #[serde(default)]
    pub analysis: serde_json::Value,
    /// Food that was analyzed.
    #[serde(default)]
    pub food_name: String,
    /// Framework that produced the analysis.
    #[serde(default)]
    pub framework: String,
}

/// Tooling summary of one crew agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDetail {
    /// Role description.
    #[serde(default)]
    pub role: String,
    /// Number of tools mounted on the agent.
    #[serde(default)]
    pub tools_count: u32,
    /// Whether the agent has any tools.
    #[serde(default)]
    pub has_tools: bool,
}

/// Crew composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewInfo {
    /// Number of agents in the crew.
    #[serde(default)]
    pub agents_count: u32,
    /// Agent names.
    #[serde(default)]
    pub agents: Vec<String>,
    /// Framework name.
    #[serde(default)]
    pub framework: String,
    /// Advertised features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Per-agent details, keyed by agent name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub agent_details: HashMap<String, AgentDetail>,
}

/// Free-form request routed through the whole crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// User message.
    pub message: String,
    /// User identifier.
    pub user_id: i64,
    /// Context such as weights, calorie target and preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonObject>,
}

/// Outcome of a crew workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Final crew answer.
    #[serde(default)]
    pub response: String,
    /// User the workflow ran for.
    #[serde(default)]
    pub user_id: i64,
    /// Scenario the crew recognized, e.g. "weight_loss" or "general".
    #[serde(default)]
    pub scenario: String,
    /// Number of tasks the workflow executed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_executed: Option<u32>,
    /// Agents that took part.
    #[serde(default)]
    pub coordinated_agents: Vec<String>,
    /// Workflow kind, when a multi-step workflow ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<String>,
}
