//! UI Components

mod daily_total;
mod date_picker;
mod food_entry;
mod log_list;
mod toast;

pub use daily_total::DailyTotal;
pub use date_picker::DatePicker;
pub use food_entry::FoodEntry;
pub use log_list::LogList;
pub use toast::Toast;
