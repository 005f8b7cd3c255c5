//! Food Log CLI
//!
//! Command-line interface to the food-log service:
//! - Show a day's logs and total
//! - Add food
//! - Browse days interactively

use clap::{Parser, Subcommand};
use foodlog::view::repl::HELP;
use foodlog::{
    telemetry, Config, HttpFoodLogApi, LogSurface, LogView, ReplCommand, SelectedDate,
    TerminalSurface,
};
use std::io::{Stderr, Stdout, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

type CliView = LogView<HttpFoodLogApi, TerminalSurface<Stdout, Stderr>>;

#[derive(Parser)]
#[command(name = "foodlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Log food and check daily totals")]
#[command(long_about = "Food Log client.\nPick a day, see what you ate and the day's totals, and add food with a quick \"apple 150\".")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/foodlog/config.toml, then ./foodlog.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show logs and daily total
    Show {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show logged entries
    Logs {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the daily total
    Total {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Hide progress towards daily targets
        #[arg(long)]
        no_targets: bool,
    },

    /// Add food, e.g. `foodlog add apple 150`
    Add {
        /// Food name followed by grams
        #[arg(required = true)]
        text: Vec<String>,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Meal (早餐, 午餐, 晚餐, 點心 or breakfast, lunch, dinner, snack)
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// Interactive mode
    Repl {
        /// Starting date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Starting meal
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = foodlog::config::generate_default_config();

        match output {
            Some(path) => {
                // Create parent directory if needed
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => {
                print!("{}", config);
            }
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    telemetry::init(&config.logging)?;
    tracing::debug!(base_url = %config.api.base_url, "using food log API");

    let result = match cli.command {
        Commands::Show { date } => {
            let mut view = build_view(&config, true)?;
            view.select_date(selected(date)).await
        }

        Commands::Logs { date } => {
            let mut view = build_view(&config, false)?.with_date(selected(date));
            let date = view.selected_date().clone();
            view.surface_mut().show_date(&date);
            view.refresh_logs().await
        }

        Commands::Total { date, no_targets } => {
            let mut view = build_view(&config, !no_targets)?.with_date(selected(date));
            let date = view.selected_date().clone();
            view.surface_mut().show_date(&date);
            view.refresh_total().await
        }

        Commands::Add { text, date, meal } => {
            let mut view = build_view(&config, true)?.with_date(selected(date));
            if let Some(meal) = meal {
                view.set_meal(&meal);
            }
            let date = view.selected_date().clone();
            view.surface_mut().show_date(&date);
            view.submit_food(&text.join(" ")).await.map(|_| ())
        }

        Commands::Repl { date, meal } => {
            let mut view = build_view(&config, true)?.with_date(selected(date));
            if let Some(meal) = meal {
                view.set_meal(&meal);
            }
            run_repl(&mut view).await?;
            Ok(())
        }

        Commands::Config { .. } => Ok(()),
    };

    // Already shown by the view
    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        std::process::exit(1);
    }

    Ok(())
}

fn build_view(config: &Config, show_targets: bool) -> Result<CliView, foodlog::ApiError> {
    let api = HttpFoodLogApi::new(&config.api)?;
    let view = LogView::new(api, TerminalSurface::stdout()).with_meal(&config.entry.default_meal);

    Ok(match config.targets.daily_targets() {
        Some(targets) if show_targets => view.with_targets(targets),
        _ => view,
    })
}

fn selected(date: Option<String>) -> SelectedDate {
    date.map(SelectedDate::from).unwrap_or_default()
}

async fn run_repl(view: &mut CliView) -> Result<(), Box<dyn std::error::Error>> {
    println!("foodlog v{} - type 'help' for commands", env!("CARGO_PKG_VERSION"));

    let date = view.selected_date().clone();
    let _ = view.select_date(date).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} {}> ", view.selected_date(), view.meal());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let result = match ReplCommand::parse(&line) {
            ReplCommand::SelectDate(date) => view.select_date(date).await,
            ReplCommand::PreviousDay => view.shift_date(-1).await,
            ReplCommand::NextDay => view.shift_date(1).await,
            ReplCommand::Today => view.select_date(SelectedDate::today()).await,
            ReplCommand::Meal(meal) => {
                view.set_meal(&meal);
                println!("Meal: {}", view.meal());
                Ok(())
            }
            ReplCommand::Add(text) => view.submit_food(&text).await.map(|_| ()),
            ReplCommand::Refresh => view.refresh().await,
            ReplCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            ReplCommand::Quit => break,
            ReplCommand::Unknown(line) => {
                view.surface_mut()
                    .show_error(&format!("Unknown command: {} (try 'help')", line));
                Ok(())
            }
            ReplCommand::Empty => Ok(()),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "command failed");
        }
    }

    Ok(())
}
