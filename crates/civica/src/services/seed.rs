//! Sample data seeding for demos and first runs
//!
//! Each table is only seeded while it is empty, so re-running is harmless.

use anyhow::Result;
use chrono::{Duration, Utc};

use crate::models::{Event, Issue};
use crate::store::Store;

/// Seed sample events and issues. Returns (events added, issues added).
pub fn seed_sample_data(store: &Store) -> Result<(usize, usize)> {
  let events = seed_events(store)?;
  let issues = seed_issues(store)?;
  Ok((events, issues))
}

fn seed_events(store: &Store) -> Result<usize> {
  if store.count_events()? > 0 {
    return Ok(0);
  }

  let now = Utc::now();
  let samples = [
    (
      "Community Meeting - Riverside Hall",
      21,
      "Community",
      "Monthly community meeting to discuss local issues and municipal services",
    ),
    (
      "Heritage Festival - Old Town Square",
      30,
      "Culture",
      "Annual heritage celebration with traditional food, music, and dance",
    ),
    (
      "Road Maintenance Workshop - City Depot",
      42,
      "Infrastructure",
      "Public workshop on upcoming road maintenance projects in the city",
    ),
    (
      "Youth Sports Tournament - Northside Complex",
      26,
      "Sports",
      "Annual youth football and netball tournament at the sports complex",
    ),
    (
      "River Clean-up Day - Eastbank Park",
      18,
      "Environment",
      "Community river and park clean-up initiative",
    ),
    (
      "Municipal Budget Consultation - Civic Centre",
      55,
      "Community",
      "Public consultation on the upcoming municipal budget",
    ),
    (
      "Arts and Crafts Market - Station Road",
      32,
      "Culture",
      "Local artisans showcase their work at the monthly market",
    ),
    (
      "Water Conservation Seminar - Library Annex",
      45,
      "Environment",
      "Educational seminar on water conservation techniques for residents",
    ),
    (
      "Senior Citizens Health Fair - Town Hall",
      37,
      "Health",
      "Free health screenings and wellness information for senior citizens",
    ),
    (
      "Cycling Safety Campaign - Market Street",
      49,
      "Safety",
      "Promoting cycling safety and infrastructure improvements",
    ),
  ];

  for (title, days_ahead, category, description) in samples {
    let event = Event::new(
      title.to_string(),
      now + Duration::days(days_ahead),
      category.to_string(),
      description.to_string(),
    );
    store.insert_event(&event)?;
  }

  Ok(samples.len())
}

fn seed_issues(store: &Store) -> Result<usize> {
  if store.count_issues()? > 0 {
    return Ok(0);
  }

  let now = Utc::now();
  let samples = [
    ("Long Street, City Centre", "Roads", "Large pothole causing traffic delays", 48),
    ("West Street, Harbour District", "Sanitation", "Blocked storm drain causing flooding", 24),
    ("Rivonia Road, Northgate", "Utilities", "Street light not working near the crossing", 12),
    ("Church Square", "Roads", "Broken traffic light at the main intersection", 6),
    ("Main Street, South End", "Sanitation", "Overflowing rubbish bins outside the market", 3),
  ];

  for (location, category, description, hours_ago) in samples {
    let mut issue =
      Issue::new(location.to_string(), category.to_string(), description.to_string(), None);
    issue.submitted_at = now - Duration::hours(hours_ago);
    store.insert_issue(&issue)?;
  }

  Ok(samples.len())
}
