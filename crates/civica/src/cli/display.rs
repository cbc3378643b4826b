//! Display formatting utilities for CLI output

use colored::*;

use crate::models::{Event, Issue, SearchAnalytics};

/// One-line event rendering: date, title, category
pub fn event_line(event: &Event) -> String {
  format!(
    "{}  {} {}",
    event.date.format("%Y-%m-%d").to_string().dimmed(),
    event.title.bold(),
    format!("[{}]", event.category).cyan(),
  )
}

pub fn display_events(events: &[Event]) {
  if events.is_empty() {
    println!("No events found.");
    return;
  }

  for event in events {
    println!("{}", event_line(event));
    println!("    {}", event.description.dimmed());
  }
}

pub fn display_issue(issue: &Issue) {
  println!(
    "{}  {} {}",
    issue.submitted_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
    issue.location.bold(),
    format!("[{}]", issue.category).cyan(),
  );
  println!("    {}", issue.description);
  if let Some(file) = &issue.attached_file {
    println!("    {} {}", "attachment:".dimmed(), file);
  }
}

pub fn display_analytics(analytics: &SearchAnalytics) {
  println!("{}", "Search analytics".blue().bold());
  println!("  Total searches:      {}", analytics.total_searches);
  println!("  Successful searches: {}", analytics.successful_searches);
  println!("  Success rate:        {:.1}%", analytics.success_rate);

  if !analytics.top_categories.is_empty() {
    println!("\n{}", "Top categories".blue().bold());
    for ranked in &analytics.top_categories {
      println!("  {:>4}  {}", ranked.count, ranked.category.cyan());
    }
  }

  if !analytics.recent_searches.is_empty() {
    println!("\n{}", "Recent searches".blue().bold());
    for search in &analytics.recent_searches {
      let keyword = search.keyword.as_deref().unwrap_or("-");
      let category = search.category.as_deref().unwrap_or("-");
      println!(
        "  {}  {:<20} {:<14} {:>3} result(s)  {}",
        search.searched_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
        keyword,
        category.cyan(),
        search.result_count,
        search.search_type.as_str().dimmed(),
      );
    }
  }
}
