// Wedding Budget Planner - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod budget;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use budget::{
    calculate, BreakdownLine, BudgetCalculator, BudgetRequest, BudgetResult, CATERING_CATEGORY,
    VENUE_CATEGORY,
};
pub use catalog::{
    Catalog, CatalogData, CatalogLookup, CatalogStats, CuisineOption, ServiceItem, VenueOption,
};
pub use db::{
    count_plans, get_events_for_plan, insert_event, load_plan, open_database, save_plan,
    setup_database, Event, SavedPlan, WeddingPlan,
};
pub use error::ApiError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
