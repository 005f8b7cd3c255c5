//! Interactive command parsing

/// Help text for the interactive prompt
pub const HELP: &str = "\
Commands:
  date <YYYY-MM-DD>   select a date
  prev / next         step one day back or forward
  today               select today
  meal <name>         meal for new entries (早餐 午餐 晚餐 點心, or breakfast/lunch/dinner/snack)
  add <food> <grams>  log food, e.g. add apple 150
  refresh, r          reload logs and total
  help, ?             show this help
  quit, q, exit       leave";

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    SelectDate(String),
    PreviousDay,
    NextDay,
    Today,
    Meal(String),
    /// Raw "food grams" text, parsed when submitted
    Add(String),
    Refresh,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("", _) => ReplCommand::Empty,
            ("date", date) if !date.is_empty() => ReplCommand::SelectDate(date.to_string()),
            ("prev", "") => ReplCommand::PreviousDay,
            ("next", "") => ReplCommand::NextDay,
            ("today", "") => ReplCommand::Today,
            ("meal", meal) if !meal.is_empty() => ReplCommand::Meal(meal.to_string()),
            // Empty text still goes through so the parser can report it
            ("add", text) => ReplCommand::Add(text.to_string()),
            ("refresh" | "r", "") => ReplCommand::Refresh,
            ("help" | "?", _) => ReplCommand::Help,
            ("quit" | "q" | "exit", "") => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}
