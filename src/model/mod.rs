//! Food log data model
//!
//! Types exchanged with the food-log API and held by the view:
//! - `LogEntry` / `Quantity`: one logged food item as reported by the backend
//! - `NewEntry` / `AddFoodRequest`: the payload of an add-food request
//! - `DailyTotal`: the backend's opaque per-day aggregate
//! - `DailyTargets` / `TargetProgress`: daily goals derived from a total
//! - `SelectedDate`: the date the view is showing

mod date;
mod entry;
mod total;

pub use date::SelectedDate;
pub use entry::{AddFoodRequest, LogEntry, Meal, NewEntry, Quantity};
pub use total::{DailyTargets, DailyTotal, NutrientTotals, TargetProgress};
