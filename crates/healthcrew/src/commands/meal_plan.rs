//! Meal plan command.

use anyhow::Result;
use clap::Args;
use healthcrew_client::{CrewMealPlanRequest, Goal, MealPlanRequest};

use super::Context;
use crate::output;

/// Arguments for the meal-plan command.
#[derive(Args, Debug)]
pub struct MealPlanArgs {
    /// Goal: weight_loss, muscle_gain or health_maintenance
    #[arg(short, long, default_value = "health_maintenance")]
    pub goal: Goal,

    /// Daily calorie target
    #[arg(short, long, default_value_t = 2000)]
    pub calories: u32,

    /// Number of days to plan
    #[arg(short, long, default_value_t = 3)]
    pub days: u32,

    /// User ID (CrewAI only)
    #[arg(short, long, default_value_t = 1)]
    pub user: i64,

    /// Dietary preference (repeatable)
    #[arg(long = "prefer")]
    pub preferences: Vec<String>,

    /// Restriction (repeatable)
    #[arg(long = "avoid")]
    pub restrictions: Vec<String>,

    /// Use the CrewAI service instead of the general service
    #[arg(long)]
    pub crew: bool,
}

/// Run the meal-plan command.
pub async fn run(args: MealPlanArgs, ctx: &Context) -> Result<()> {
    if args.crew {
        let request = CrewMealPlanRequest {
            user_id: args.user,
            target_calories: args.calories,
            days: args.days,
            goal: args.goal,
            dietary_preferences: args.preferences,
            restrictions: args.restrictions,
        };
        let response = ctx.crew_client()?.generate_meal_plan(&request).await?;
        if ctx.json_output {
            return output::print_json(&response);
        }

        let plan = output::expect_success(response)?;
        output::header("Meal Plan (CrewAI)");
        output::field("Days", plan.days);
        output::field("Calories", format!("{} kcal/day", plan.target_calories));
        output::field("Framework", &plan.framework);
        output::block("Plan", &plan.meal_plan)?;
    } else {
        let mut request = MealPlanRequest::new(args.goal, args.calories, args.days);
        request.dietary_preferences = args.preferences;
        request.restrictions = args.restrictions;

        let plan = ctx.agent_client()?.generate_meal_plan(&request).await?;
        if ctx.json_output {
            return output::print_json(&plan);
        }

        output::header("Meal Plan");
        print_days(&plan);
    }
    println!();

    Ok(())
}

/// Print the day-by-day summary of a general-service plan.
fn print_days(plan: &healthcrew_client::JsonObject) {
    let Some(days) = plan.get("meal_plan").and_then(|v| v.as_array()) else {
        output::field("Plan", serde_json::Value::Object(plan.clone()));
        return;
    };

    for day in days {
        let number = day.get("day").cloned().unwrap_or_default();
        let date = day.get("date").and_then(|v| v.as_str()).unwrap_or("-");
        println!();
        println!("  Day {number} ({date})");
        for meal in ["breakfast", "lunch", "dinner"] {
            if let Some(name) = day
                .get(meal)
                .and_then(|m| m.get("name"))
                .and_then(|n| n.as_str())
            {
                output::field(&format!("  {meal}"), name);
            }
        }
    }
}
