//! # Food Log
//!
//! Client for a food-logging service: pick a day, see what was eaten, see the
//! day's totals, and add food with a quick "apple 150" line.
//!
//! ## Modules
//!
//! - [`model`]: Log entries, dates, daily totals and targets
//! - [`input`]: Parsing of quick-add text
//! - [`api`]: The food-log endpoints and their HTTP client
//! - [`view`]: The log view controller and its terminal rendering
//!
//! The HTTP client, configuration, and logging setup need the `client`
//! feature (on by default). Without it the crate builds for the browser.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foodlog::{Config, HttpFoodLogApi, LogView, TerminalSurface};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let api = HttpFoodLogApi::new(&config.api)?;
//!
//!     let mut view = LogView::new(api, TerminalSurface::stdout());
//!     view.select_date("2024-01-01").await?;
//!     view.submit_food("apple 150").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "client")]
pub mod config;
pub mod input;
pub mod model;
#[cfg(feature = "client")]
pub mod telemetry;
pub mod view;

// Re-export top-level types for convenience
pub use model::{
    AddFoodRequest, DailyTargets, DailyTotal, LogEntry, Meal, NewEntry, NutrientTotals, Quantity,
    SelectedDate, TargetProgress,
};

pub use input::{parse_food_input, FoodInput, InputError};

pub use api::{daily_total_path, logs_path, ApiError, ApiResult, FoodLogApi, ADD_FOOD_PATH};

pub use view::{LogSurface, LogView, ReplCommand, ViewError};

#[cfg(feature = "client")]
pub use api::HttpFoodLogApi;

#[cfg(feature = "client")]
pub use view::TerminalSurface;

#[cfg(feature = "client")]
pub use config::{ApiConfig, Config, ConfigError, EntryConfig, LoggingConfig, TargetsConfig};

#[cfg(feature = "client")]
pub use telemetry::TelemetryError;
