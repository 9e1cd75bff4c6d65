//! Demo command - walks through every operation of one service.
//!
//! Each step is independent: a failure is reported and the walk continues
//! with the next operation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use healthcrew_client::{
    AgentClient, ConversationRequest, CrewClient, CrewMealPlanRequest, CrewNutritionRequest,
    FoodRecognitionRequest, Goal, HealthGoalRequest, HealthPlanRequest, JsonObject,
    MealPlanRequest, NutritionRequest, ProcessRequest, RecommendationRequest,
};
use serde_json::json;

use super::Context;
use crate::output;

/// Service to demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoTarget {
    /// General multi-agent service
    Agent,
    /// CrewAI service
    Crew,
}

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Which service to walk through
    #[arg(value_enum)]
    pub target: DemoTarget,

    /// User ID used in every request
    #[arg(short, long, default_value_t = 1001)]
    pub user: i64,
}

/// Tally of demo steps.
#[derive(Debug, Default)]
struct Tally {
    passed: usize,
    failed: usize,
}

impl Tally {
    /// Report the outcome of one step; failures are logged, never raised.
    fn record<T>(
        &mut self,
        step: &str,
        result: healthcrew_client::Result<T>,
        show: impl FnOnce(T) -> Result<()>,
    ) {
        match result {
            Ok(value) => match show(value) {
                Ok(()) => self.passed += 1,
                Err(e) => {
                    tracing::warn!(step, error = %e, "demo step failed");
                    output::failed(format!("{step}: {e}"));
                    self.failed += 1;
                }
            },
            Err(e) => {
                tracing::warn!(step, phase = e.phase(), error = %e, "demo step failed");
                output::failed(format!("{step}: {e}"));
                self.failed += 1;
            }
        }
        println!();
    }
}

/// Run the demo command.
pub async fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let tally = match args.target {
        DemoTarget::Agent => agent_demo(&ctx.agent_client()?, args.user).await,
        DemoTarget::Crew => crew_demo(&ctx.crew_client()?, args.user).await,
    };

    println!(
        "{} {} passed, {} failed",
        style("Demo finished:").bold(),
        tally.passed,
        tally.failed
    );
    Ok(())
}

fn step(number: usize, title: &str) {
    println!("{}", style(format!("{number}. {title}...")).cyan());
}

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

async fn agent_demo(client: &AgentClient, user_id: i64) -> Tally {
    let mut tally = Tally::default();
    output::header("General Service Demo");
    println!();

    step(1, "Health check");
    tally.record("health check", client.health_check().await, |health| {
        output::ok("service answered");
        output::block("Status", &serde_json::Value::Object(health))
    });

    step(2, "Food recognition");
    let request = FoodRecognitionRequest {
        image_path: Some("test_food.jpg".to_string()),
        food_name: None,
    };
    tally.record("food recognition", client.recognize_food(&request).await, |food| {
        output::ok(&food.food_name);
        output::field("Calories", format!("{} kcal", food.calories));
        output::field("Protein", format!("{:.1} g", food.protein));
        output::field("Carbohydrate", format!("{:.1} g", food.carbohydrate));
        output::field("Fat", format!("{:.1} g", food.fat));
        output::field("Confidence", format!("{:.2}", food.confidence));
        Ok(())
    });

    step(3, "Nutrition analysis");
    let request = NutritionRequest {
        food_data: object(json!({
            "foodName": "Kung Pao chicken",
            "calories": 280,
            "protein": 18.0,
            "carbohydrate": 12.0,
            "fat": 18.0,
            "fiber": 2.5,
            "foodType": "meat"
        })),
        daily_intake: vec![object(json!({
            "calories": 350,
            "protein": 15.0,
            "carbohydrate": 45.0,
            "fat": 10.0
        }))],
        user_profile: None,
    };
    tally.record("nutrition analysis", client.analyze_nutrition(&request).await, |analysis| {
        output::ok("analysis complete");
        if let Some(details) = analysis.get("nutrition_analysis") {
            output::field("Nutrient density", details["nutrient_density"].clone());
            output::field("Health rating", details["health_rating"].clone());
        }
        print_list("Recommendations", analysis.get("recommendations"));
        Ok(())
    });

    step(4, "Conversation");
    let request = ConversationRequest::new(
        user_id,
        "demo-session-001",
        "I want to lose weight. Where do I start?",
    );
    tally.record("conversation", client.chat(&request).await, |reply| {
        output::ok("reply received");
        println!("  {}", reply.response);
        Ok(())
    });

    step(5, "Health goal analysis");
    let request = HealthGoalRequest {
        goal_type: Goal::WeightLoss,
        current_data: object(json!({"value": 75.0})),
        historical_data: vec![
            object(json!({"value": 80.0, "date": "2024-11-01"})),
            object(json!({"value": 78.0, "date": "2024-11-15"})),
            object(json!({"value": 76.0, "date": "2024-11-25"})),
        ],
        target: object(json!({"value": 70.0, "deadline": "2025-02-01"})),
    };
    tally.record("health goal analysis", client.analyze_health_goal(&request).await, |goal| {
        output::ok("analysis complete");
        if let Some(progress) = goal.get("progress_analysis") {
            output::field("Completion", progress["completion_rate"].clone());
            output::field("Trend", progress["trend"].clone());
            output::field("Days to goal", progress["days_to_goal"].clone());
        }
        print_list("Recommendations", goal.get("recommendations"));
        Ok(())
    });

    step(6, "Meal plan");
    let request = MealPlanRequest::new(Goal::WeightLoss, 1800, 3);
    tally.record("meal plan", client.generate_meal_plan(&request).await, |plan| {
        output::ok("3-day plan generated");
        output::block("Plan", &serde_json::Value::Object(plan))
    });

    step(7, "Community recommendations");
    let request = RecommendationRequest::new(user_id, "posts");
    tally.record("recommendations", client.recommendations(&request).await, |recs| {
        let items = recs
            .get("recommendations")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        output::ok(&format!("{} recommendations", items.len()));
        for (i, item) in items.iter().take(3).enumerate() {
            println!("  {}. {} (source: {})", i + 1, item["title"], item["source"]);
        }
        Ok(())
    });

    tally
}

async fn crew_demo(client: &CrewClient, user_id: i64) -> Tally {
    let mut tally = Tally::default();
    output::header("CrewAI Service Demo");
    println!();

    step(1, "Health check");
    tally.record("health check", client.health_check().await, |health| {
        output::ok("service answered");
        output::field("Status", health.get("status").cloned().unwrap_or_default());
        output::field("Framework", health.get("framework").cloned().unwrap_or_default());
        Ok(())
    });

    step(2, "Crew info");
    tally.record("crew info", client.crew_info().await, |response| {
        let info = output::expect_success(response)?;
        output::ok(&format!("{} agents", info.agents_count));
        output::field("Agents", info.agents.join(", "));
        print_list("Features", Some(&json!(info.features)));
        Ok(())
    });

    step(3, "Conversation");
    let request = ConversationRequest::new(
        user_id,
        "demo-session-001",
        "I want to lose 5 kg in a month. Any advice?",
    )
    .with_context(object(json!({
        "goal": "weight_loss",
        "current_weight": 75.0,
        "target_weight": 70.0
    })));
    tally.record("conversation", client.chat(&request).await, |response| {
        let reply = output::expect_success(response)?;
        output::ok("reply received");
        println!("  {}", reply.response);
        Ok(())
    });

    step(4, "Complete health plan");
    let request = HealthPlanRequest::new(user_id, Goal::WeightLoss, 1800, 7)
        .with_weights(75.0, 70.0)
        .with_preferences(["high protein", "low carb"])
        .with_restrictions(["no spicy food"]);
    tally.record("health plan", client.create_health_plan(&request).await, |response| {
        let message = response.message.clone();
        let plan = output::expect_success(response)?;
        output::ok("plan created");
        if let Some(message) = message {
            output::field("Message", message);
        }
        output::block("Plan", &plan)
    });

    step(5, "7-day meal plan");
    let request = CrewMealPlanRequest {
        user_id,
        target_calories: 1800,
        days: 7,
        goal: Goal::WeightLoss,
        dietary_preferences: vec!["high protein".into(), "low carb".into(), "healthy fats".into()],
        restrictions: vec!["no spicy food".into()],
    };
    tally.record("meal plan", client.generate_meal_plan(&request).await, |response| {
        let plan = output::expect_success(response)?;
        output::ok("plan generated");
        output::field("Days", plan.days);
        output::field("Calories", format!("{} kcal/day", plan.target_calories));
        output::field("Framework", plan.framework);
        Ok(())
    });

    step(6, "Nutrition analysis");
    let request = CrewNutritionRequest {
        food_name: "braised pork belly".to_string(),
        user_id,
        goal: Some(Goal::WeightLoss),
    };
    tally.record("nutrition analysis", client.analyze_nutrition(&request).await, |response| {
        let nutrition = output::expect_success(response)?;
        output::ok("analysis complete");
        output::field("Food", &nutrition.food_name);
        output::block("Analysis", &nutrition.analysis)
    });

    step(7, "Unified crew workflow");
    let request = ProcessRequest {
        message: "Help me build a healthy weight-loss plan".to_string(),
        user_id,
        context: Some(object(json!({
            "current_weight": 75.0,
            "target_weight": 70.0,
            "days": 30,
            "target_calories": 1800
        }))),
    };
    tally.record("crew workflow", client.process(&request).await, |response| {
        let outcome = output::expect_success(response)?;
        output::ok(&format!("scenario: {}", outcome.scenario));
        output::field("Agents", outcome.coordinated_agents.join(", "));
        println!("  {}", outcome.response);
        Ok(())
    });

    tally
}

fn print_list(label: &str, value: Option<&serde_json::Value>) {
    let Some(items) = value.and_then(|v| v.as_array()) else {
        return;
    };
    output::field(label, "");
    for item in items {
        match item.as_str() {
            Some(text) => println!("    - {text}"),
            None => println!("    - {item}"),
        }
    }
}
