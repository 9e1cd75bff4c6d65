//! healthcrew - command-line front end for the health-planning services.
//!
//! Main entry point for the healthcrew CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use healthcrew_client::ServiceConfig;
use tracing_subscriber::prelude::*;

mod commands;
mod output;

use commands::{chat, crew_info, demo, meal_plan, nutrition, plan, process, status};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// healthcrew - talk to the multi-agent health-planning service
#[derive(Parser)]
#[command(name = "healthcrew")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: <config dir>/healthcrew/config.toml)
    #[arg(long, global = true, env = "HEALTHCREW_CONFIG")]
    pub config: Option<PathBuf>,

    /// General service URL (default: http://localhost:5000)
    #[arg(long, global = true, env = "HEALTHCREW_AGENT_URL")]
    pub agent_url: Option<String>,

    /// CrewAI service URL (default: http://localhost:5001)
    #[arg(long, global = true, env = "HEALTHCREW_CREW_URL")]
    pub crew_url: Option<String>,

    /// Also write JSON logs to a daily-rotated file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show health of both services
    Status(status::StatusArgs),

    /// Send one conversation message
    Chat(chat::ChatArgs),

    /// Create a complete health plan with the crew
    Plan(plan::PlanArgs),

    /// Generate a meal plan
    MealPlan(meal_plan::MealPlanArgs),

    /// Analyze the nutrition of a food with the crew
    Nutrition(nutrition::NutritionArgs),

    /// Show the crew composition
    CrewInfo(crew_info::CrewInfoArgs),

    /// Route a free-form request through the whole crew
    Process(process::ProcessArgs),

    /// Walk through every operation of one service
    Demo(demo::DemoArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "healthcrew=debug,healthcrew_client=debug,info"
    } else {
        "healthcrew=info,healthcrew_client=info,warn"
    };

    let (file_layer, _guard) = match &cli.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "healthcrew.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "healthcrew=trace,healthcrew_client=trace,info",
                ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(file_layer)
        .init();

    let mut services = load_service_config(cli.config.as_deref())?;
    if let Some(url) = cli.agent_url {
        services.agent.base_url = Some(url);
    }
    if let Some(url) = cli.crew_url {
        services.crew.base_url = Some(url);
    }

    // Create context for commands
    let ctx = commands::Context {
        agent: services.agent(),
        crew: services.crew(),
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Status(args) => status::run(args, &ctx).await,
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::Plan(args) => plan::run(args, &ctx).await,
        Commands::MealPlan(args) => meal_plan::run(args, &ctx).await,
        Commands::Nutrition(args) => nutrition::run(args, &ctx).await,
        Commands::CrewInfo(args) => crew_info::run(args, &ctx).await,
        Commands::Process(args) => process::run(args, &ctx).await,
        Commands::Demo(args) => demo::run(args, &ctx).await,
    }
}

/// Load the service config from `path`, or from the default location when
/// a file exists there.
fn load_service_config(path: Option<&Path>) -> Result<ServiceConfig> {
    if let Some(path) = path {
        return ServiceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => ServiceConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        _ => Ok(ServiceConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("healthcrew").join("config.toml"))
}
