//! Log View
//!
//! The food-log widget: a selected date, the entries logged on it, the daily
//! total, and a quick-add input. [`LogView`] owns the state and talks to the
//! API; whatever displays it implements [`LogSurface`].

mod log_view;
pub mod repl;
#[cfg(feature = "client")]
mod terminal;

pub use log_view::LogView;
pub use repl::ReplCommand;
#[cfg(feature = "client")]
pub use terminal::TerminalSurface;

use thiserror::Error;

use crate::api::ApiError;
use crate::input::InputError;
use crate::model::{SelectedDate, TargetProgress};

/// Render target for the log view
pub trait LogSurface {
    /// Reflect the selected date in the date control
    fn show_date(&mut self, date: &SelectedDate);

    /// Replace the log list with these lines
    fn render_logs(&mut self, lines: Vec<String>);

    /// Replace the daily total with this text
    fn render_total(&mut self, text: &str);

    /// Progress towards daily targets
    fn render_progress(&mut self, _rows: &[TargetProgress]) {}

    fn show_notice(&mut self, message: &str);

    fn show_error(&mut self, message: &str);
}

/// Errors surfaced by view operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Not a calendar date: {0}")]
    InvalidDate(String),
}
