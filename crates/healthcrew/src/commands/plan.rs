//! Plan command - complete health plan through the crew.

use anyhow::Result;
use clap::Args;
use healthcrew_client::{Goal, HealthPlanRequest};

use super::Context;
use crate::output;

/// Arguments for the plan command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Goal: weight_loss, muscle_gain or health_maintenance
    #[arg(short, long, default_value = "weight_loss")]
    pub goal: Goal,

    /// Daily calorie target
    #[arg(short, long, default_value_t = 1800)]
    pub calories: u32,

    /// Plan length in days
    #[arg(short, long, default_value_t = 7)]
    pub days: u32,

    /// User ID
    #[arg(short, long, default_value_t = 1)]
    pub user: i64,

    /// Current weight in kg
    #[arg(long, requires = "target_weight")]
    pub current_weight: Option<f64>,

    /// Target weight in kg
    #[arg(long, requires = "current_weight")]
    pub target_weight: Option<f64>,

    /// Dietary preference (repeatable)
    #[arg(long = "prefer")]
    pub preferences: Vec<String>,

    /// Restriction (repeatable)
    #[arg(long = "avoid")]
    pub restrictions: Vec<String>,

    /// Food to analyze as part of the plan
    #[arg(long)]
    pub food: Option<String>,
}

impl PlanArgs {
    fn to_request(&self) -> HealthPlanRequest {
        let mut request = HealthPlanRequest::new(self.user, self.goal, self.calories, self.days)
            .with_preferences(self.preferences.iter().cloned())
            .with_restrictions(self.restrictions.iter().cloned());
        if let (Some(current), Some(target)) = (self.current_weight, self.target_weight) {
            request = request.with_weights(current, target);
        }
        request.food_name = self.food.clone();
        request
    }
}

/// Run the plan command.
pub async fn run(args: PlanArgs, ctx: &Context) -> Result<()> {
    let client = ctx.crew_client()?;
    let request = args.to_request();

    tracing::info!(user_id = request.user_id, goal = %request.goal, days = request.days, "requesting health plan");
    let response = client.create_health_plan(&request).await?;

    if ctx.json_output {
        return output::print_json(&response);
    }

    let message = response.message.clone();
    let data = output::expect_success(response)?;

    output::header("Health Plan");
    output::field("Goal", request.goal);
    output::field("Days", request.days);
    output::field("Calories", format!("{} kcal/day", request.target_calories));
    if let Some(message) = message {
        output::field("Message", message);
    }
    output::block("Plan", &data)?;
    println!();

    Ok(())
}
