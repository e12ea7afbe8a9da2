use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wedding_budget::logging::init_logging;
use wedding_budget::{
    calculate, get_events_for_plan, load_plan, open_database, BudgetRequest, Catalog,
};

/// Wedding budget planner - catalog browsing and budget estimates from the terminal
#[derive(Parser)]
#[command(name = "wedding-budget", version)]
struct Cli {
    /// JSON catalog replacing the built-in data
    #[arg(long, global = true, env = "WEDDING_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log level filter
    #[arg(long, global = true, env = "WEDDING_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues, cuisines and services
    Catalog,
    /// Estimate a budget for a selection
    Calculate {
        /// Number of guests
        #[arg(long)]
        guests: u32,

        #[arg(long)]
        venue: Option<String>,

        /// Cuisine id (repeatable)
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        /// Service id (repeatable)
        #[arg(long = "service")]
        services: Vec<String>,
    },
    /// Saved plan commands
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Print a saved plan and its history
    Show {
        plan_id: String,

        #[arg(long, env = "WEDDING_DB", default_value = "wedding_plans.db")]
        db: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, false)?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::with_defaults(),
    };

    match cli.command {
        Commands::Catalog => run_catalog(&catalog),
        Commands::Calculate {
            guests,
            venue,
            cuisines,
            services,
        } => {
            let request = BudgetRequest {
                guest_count: guests,
                venue_id: venue,
                cuisine_ids: Some(cuisines),
                service_ids: Some(services),
            };
            run_calculate(&catalog, &request)
        }
        Commands::Plan {
            command: PlanCommands::Show { plan_id, db },
        } => run_plan_show(&db, &plan_id),
    }
}

fn run_catalog(catalog: &Catalog) -> Result<()> {
    let stats = catalog.stats();

    println!("🏛️  Venues ({})", stats.venue_count);
    for venue in catalog.venues() {
        println!(
            "  {:<4} {:<26} {:>10}  {} · {}",
            venue.id, venue.name, venue.price, venue.price_range, venue.capacity
        );
    }

    println!("\n🍛 Cuisines ({})", stats.cuisine_count);
    for cuisine in catalog.cuisines() {
        println!(
            "  {:<4} {:<26} {:>10}/plate  {}",
            cuisine.id, cuisine.name, cuisine.price_per_plate, cuisine.cuisine_type
        );
    }

    println!("\n📸 Services ({})", stats.service_count);
    for (category, items) in catalog.services_by_category() {
        println!("  {}", category);
        for service in items {
            println!(
                "    {:<4} {:<26} {:>10}  {}",
                service.id, service.name, service.price, service.package_type
            );
        }
    }

    Ok(())
}

fn run_calculate(catalog: &Catalog, request: &BudgetRequest) -> Result<()> {
    let result = calculate(catalog, request);

    println!("💍 Budget for {} guests", result.guest_count);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if result.is_empty() {
        println!("  (nothing selected)");
    }

    for line in &result.breakdown {
        match &line.details {
            Some(details) => println!(
                "  {:<16} {:<26} {:>10}  ({})",
                line.category, line.item, line.cost, details
            ),
            None => println!("  {:<16} {:<26} {:>10}", line.category, line.item, line.cost),
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<43} {:>10}", "TOTAL", result.total_cost);

    Ok(())
}

fn run_plan_show(db_path: &str, plan_id: &str) -> Result<()> {
    if !std::path::Path::new(db_path).exists() {
        bail!("Plan database not found: {}", db_path);
    }

    let conn = open_database(db_path)?;

    let Some(plan) = load_plan(&conn, plan_id)? else {
        bail!("Wedding plan not found: {}", plan_id);
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    let events = get_events_for_plan(&conn, plan_id)?;
    println!("\n🕒 History ({} events)", events.len());
    for event in events {
        println!("  {}  {}", event.timestamp.to_rfc3339(), event.event_type);
    }

    Ok(())
}
