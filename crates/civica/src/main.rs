use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use civica::cli::commands;

#[derive(Parser)]
#[command(name = "civica")]
#[command(
  about = "Civica - Municipal Services\nReport service issues and discover community events"
)]
#[command(version)]
struct Cli {
  /// User identifier that scopes search history and preferences
  #[arg(long, global = true, default_value = "local")]
  user: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Report a municipal service issue
  ReportIssue {
    /// Where the issue was observed
    location: String,
    /// Issue category, e.g. Roads, Sanitation, Utilities
    category: String,
    /// What is wrong
    description: String,
    /// Optional attachment (image, PDF, or Word document)
    #[arg(short, long)]
    attachment: Option<PathBuf>,
  },
  /// List reported issues, newest first
  Issues {
    /// Show at most this many issues
    #[arg(short, long)]
    limit: Option<u32>,
  },
  /// Add a community event
  AddEvent {
    /// Event title
    title: String,
    /// Event date (YYYY-MM-DD)
    date: NaiveDate,
    /// Event category
    category: String,
    /// Event description
    description: String,
  },
  /// List all events grouped by day
  Events,
  /// List distinct event categories
  Categories,
  /// Search events by keyword, category, and date range
  Search {
    /// Keyword matched against title and description
    #[arg(short, long)]
    keyword: Option<String>,
    /// Exact category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,
    /// Earliest event date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Latest event date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
  },
  /// Show personalized event recommendations
  Recommend {
    /// Maximum number of recommendations
    #[arg(short, long, default_value_t = 3)]
    count: u32,
  },
  /// Show search analytics
  Analytics,
  /// Seed sample events and issues into an empty database
  Seed,
}

fn handle(user: &str, command: Command) -> Result<()> {
  match command {
    Command::ReportIssue { location, category, description, attachment } => {
      commands::report_issue(&location, &category, &description, attachment.as_deref())
    }
    Command::Issues { limit } => commands::list_issues(limit),
    Command::AddEvent { title, date, category, description } => {
      commands::add_event(&title, date, &category, &description)
    }
    Command::Events => commands::list_events(),
    Command::Categories => commands::list_categories(),
    Command::Search { keyword, category, from, to } => {
      commands::search_events(user, keyword.as_deref(), category.as_deref(), from, to)
    }
    Command::Recommend { count } => commands::recommend_events(user, count),
    Command::Analytics => commands::show_analytics(),
    Command::Seed => commands::seed_sample_data(),
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  handle(&cli.user, cli.command)?;
  Ok(())
}
