//! Issue reporting and listing

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Issue;
use crate::services::attachments::{self, AttachmentMeta};
use crate::store::Store;
use crate::validation::require_fields;

/// How many issues the "recent issues" view shows
pub const RECENT_ISSUES_LIMIT: u32 = 10;

/// Caller-supplied input for a new issue report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIssue {
  pub location: String,
  pub category: String,
  pub description: String,
  #[serde(default)]
  pub attachment: Option<AttachmentMeta>,
}

/// Validate and persist an issue report. Nothing is written when validation
/// fails.
pub fn report_issue(store: &Store, input: NewIssue) -> Result<Issue> {
  require_fields(&[
    ("location", &input.location),
    ("category", &input.category),
    ("description", &input.description),
  ])?;

  if let Some(attachment) = &input.attachment {
    attachments::validate(attachment)?;
  }

  let issue = Issue::new(
    input.location,
    input.category,
    input.description,
    input.attachment.map(|a| a.file_name),
  );

  store.insert_issue(&issue)?;
  tracing::info!(id = %issue.id, category = %issue.category, "issue reported");

  Ok(issue)
}

/// All issues, newest first
pub fn all_issues(store: &Store) -> Result<Vec<Issue>> {
  store.issues_newest_first()
}

/// The newest issues for the report-issue view
pub fn recent_issues(store: &Store) -> Result<Vec<Issue>> {
  store.recent_issues(RECENT_ISSUES_LIMIT)
}
