//! CLI command implementations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use colored::*;
use std::path::Path;

use crate::cli::display;
use crate::services::attachments::AttachmentMeta;
use crate::services::events::{self, EventFilter, NewEvent};
use crate::services::issues::{self, NewIssue};
use crate::services::{recommend, seed};
use crate::store::Store;

fn day_start(date: NaiveDate) -> DateTime<Utc> {
  date.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
  let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
  date.and_time(end_of_day).and_utc()
}

pub fn report_issue(
  location: &str,
  category: &str,
  description: &str,
  attachment: Option<&Path>,
) -> Result<()> {
  let store = Store::open_default()?;

  let attachment = attachment.map(AttachmentMeta::from_path).transpose()?;
  let input = NewIssue {
    location: location.to_string(),
    category: category.to_string(),
    description: description.to_string(),
    attachment,
  };

  let issue = issues::report_issue(&store, input)?;
  let total = store.count_issues()?;

  println!("{} Issue reported: {}", "✓".green(), issue.id.yellow());
  println!("  Total issues on record: {total}");
  Ok(())
}

pub fn list_issues(limit: Option<u32>) -> Result<()> {
  let store = Store::open_default()?;

  let mut all = issues::all_issues(&store)?;
  if let Some(limit) = limit {
    all.truncate(limit as usize);
  }

  if all.is_empty() {
    println!("No issues reported yet.");
    return Ok(());
  }

  for issue in &all {
    display::display_issue(issue);
  }
  Ok(())
}

pub fn add_event(title: &str, date: NaiveDate, category: &str, description: &str) -> Result<()> {
  let store = Store::open_default()?;

  let event = events::add_event(
    &store,
    NewEvent {
      title: title.to_string(),
      date: day_start(date),
      category: category.to_string(),
      description: description.to_string(),
    },
  )?;

  println!("{} Added event {} on {}", "✓".green(), event.title.bold(), date);
  Ok(())
}

pub fn list_events() -> Result<()> {
  let store = Store::open_default()?;

  let by_day = events::events_by_day(&store)?;
  if by_day.is_empty() {
    println!("No events scheduled.");
    return Ok(());
  }

  for (day, events) in by_day {
    println!("{}", day.format("%A, %-d %B %Y").to_string().blue().bold());
    for event in events {
      println!("  {} {}", event.title.bold(), format!("[{}]", event.category).cyan());
      println!("    {}", event.description.dimmed());
    }
    println!();
  }
  Ok(())
}

pub fn list_categories() -> Result<()> {
  let store = Store::open_default()?;

  let categories = events::categories(&store)?;
  if categories.is_empty() {
    println!("No categories found.");
    return Ok(());
  }

  println!("{} Event categories:", "▸".cyan());
  for category in categories {
    println!("  {}", category.cyan());
  }
  Ok(())
}

pub fn search_events(
  user: &str,
  keyword: Option<&str>,
  category: Option<&str>,
  from: Option<NaiveDate>,
  to: Option<NaiveDate>,
) -> Result<()> {
  let store = Store::open_default()?;

  let filter = EventFilter {
    keyword: keyword.map(String::from),
    category: category.map(String::from),
    start_date: from.map(day_start),
    end_date: to.map(day_end),
  };

  let results = events::search_events(&store, user, &filter)?;

  if results.is_empty() {
    println!("No events found matching your search criteria.");
  } else {
    println!("{} Found {} event(s):", "✓".green(), results.len());
    display::display_events(&results);
  }

  let recommendations =
    recommend::personalized_recommendations(&store, user, recommend::DEFAULT_MAX_RECOMMENDATIONS);
  if !recommendations.is_empty() {
    println!("\n{}", "You might also like".blue().bold());
    display::display_events(&recommendations);
  }

  Ok(())
}

pub fn recommend_events(user: &str, count: u32) -> Result<()> {
  let store = Store::open_default()?;

  let recommendations = recommend::personalized_recommendations(&store, user, count);
  if recommendations.is_empty() {
    println!("No upcoming events to recommend.");
    return Ok(());
  }

  println!("{} Recommended for {}:", "▸".cyan(), user.yellow());
  display::display_events(&recommendations);
  Ok(())
}

pub fn show_analytics() -> Result<()> {
  let store = Store::open_default()?;

  let analytics = recommend::search_analytics(&store)?;
  display::display_analytics(&analytics);
  Ok(())
}

pub fn seed_sample_data() -> Result<()> {
  let store = Store::open_default()?;

  let (events, issues) = seed::seed_sample_data(&store)?;
  println!("{} Seeded {} event(s) and {} issue(s)", "✓".green(), events, issues);
  Ok(())
}
