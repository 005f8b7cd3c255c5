//! Terminal rendering of the log view

use std::io::{self, Stderr, Stdout, Write};

use super::LogSurface;
use crate::model::{SelectedDate, TargetProgress};

const BAR_WIDTH: usize = 20;

/// Writes the log view as text; errors go to a separate stream
pub struct TerminalSurface<O, E> {
    out: O,
    err: E,
}

impl TerminalSurface<Stdout, Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    // A closed terminal is not worth failing the view over
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<O: Write, E: Write> LogSurface for TerminalSurface<O, E> {
    fn show_date(&mut self, date: &SelectedDate) {
        self.line(&format!("Date: {}", date));
    }

    fn render_logs(&mut self, lines: Vec<String>) {
        self.line("Logs:");
        if lines.is_empty() {
            self.line("  No entries");
        }
        for line in lines {
            self.line(&format!("  • {}", line));
        }
    }

    fn render_total(&mut self, text: &str) {
        self.line("Daily total:");
        self.line(text);
    }

    fn render_progress(&mut self, rows: &[TargetProgress]) {
        self.line("Targets:");
        for row in rows {
            self.line(&format!("  {}", progress_line(row)));
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.line(&format!("✓ {}", message));
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.err, "Error: {}", message);
    }
}

/// "[#####---------------]  25% 熱量 662 / 2650 kcal", with a trailing `!` once over target
fn progress_line(row: &TargetProgress) -> String {
    let ratio = row.ratio();
    let filled = ((ratio.min(1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let mut line = format!(
        "[{}{}] {:>3.0}% {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        ratio * 100.0,
        row.summary()
    );
    if row.is_exceeded() {
        line.push_str(" !");
    }
    line
}
