use std::path::{Path, PathBuf};

use anyhow::Result;
use campkit::{AppError, Config};
use campkit_mealplan::{format_meal_plan, generate_shopping_list, MealPlan};
use campkit_packing::PackingCategory;
use campkit_shopping::{format_for_export, suggested_staples};
use clap::{Parser, Subcommand};
use strum::VariantArray;

/// campkit - camping trip planning toolkit
#[derive(Parser)]
#[command(name = "campkit")]
#[command(about = "Trip meal planning and shopping list generation", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a shopping list from a meal plan file
    ShoppingList {
        /// Path to the meal plan JSON file
        plan: PathBuf,

        /// Group items by category (overrides config)
        #[arg(long)]
        grouped: bool,

        /// Print a flat list in merge order
        #[arg(long, conflicts_with = "grouped")]
        flat: bool,

        /// Append suggested staples scaled to the trip
        #[arg(long)]
        staples: bool,
    },
    /// Print the day-by-day meal plan from a meal plan file
    MealPlan {
        /// Path to the meal plan JSON file
        plan: PathBuf,
    },
    /// Print the canonical packing category table
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(AppError::Validation)?;

    campkit::observability::init_observability(&config.logging.level, &config.logging.format)?;

    match cli.command {
        Commands::ShoppingList {
            plan,
            grouped,
            flat,
            staples,
        } => shopping_list_command(&config, &plan, grouped, flat, staples),
        Commands::MealPlan { plan } => meal_plan_command(&plan),
        Commands::Categories => categories_command(),
    }
}

fn load_plan(path: &Path) -> Result<MealPlan, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn shopping_list_command(
    config: &Config,
    path: &Path,
    grouped_flag: bool,
    flat: bool,
    staples_flag: bool,
) -> Result<()> {
    let plan = load_plan(path)?;
    tracing::info!(trip = %plan.trip.name, "generating shopping list");

    let mut items = generate_shopping_list(&plan);
    if staples_flag || config.export.include_staples {
        items.extend(suggested_staples(
            plan.trip.duration_days(),
            plan.trip.party_size,
        ));
    }

    let grouped = if flat {
        false
    } else {
        grouped_flag || config.export.grouped
    };
    print!("{}", format_for_export(&items, grouped));

    Ok(())
}

fn meal_plan_command(path: &Path) -> Result<()> {
    let plan = load_plan(path)?;
    print!("{}", format_meal_plan(&plan));
    Ok(())
}

fn categories_command() -> Result<()> {
    for category in PackingCategory::VARIANTS {
        println!(
            "{:>2}. {:<12} {:<12} {}",
            category.order() + 1,
            category.key(),
            category.icon(),
            category.label()
        );
    }
    Ok(())
}
