//! Nutrition command - crew analysis of one food.

use anyhow::Result;
use clap::Args;
use healthcrew_client::{CrewNutritionRequest, Goal};

use super::Context;
use crate::output;

/// Arguments for the nutrition command.
#[derive(Args, Debug)]
pub struct NutritionArgs {
    /// Food to analyze
    #[arg(required = true)]
    pub food: String,

    /// User ID
    #[arg(short, long, default_value_t = 1)]
    pub user: i64,

    /// Goal to judge the food against
    #[arg(short, long)]
    pub goal: Option<Goal>,
}

/// Run the nutrition command.
pub async fn run(args: NutritionArgs, ctx: &Context) -> Result<()> {
    let request = CrewNutritionRequest {
        food_name: args.food,
        user_id: args.user,
        goal: args.goal,
    };

    let response = ctx.crew_client()?.analyze_nutrition(&request).await?;
    if ctx.json_output {
        return output::print_json(&response);
    }

    let nutrition = output::expect_success(response)?;
    output::header("Nutrition Analysis");
    output::field("Food", &nutrition.food_name);
    output::field("Framework", &nutrition.framework);
    output::block("Analysis", &nutrition.analysis)?;
    println!();

    Ok(())
}
