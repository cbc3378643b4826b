//! Validation errors surfaced to callers before anything is persisted

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("missing required fields: {}", fields.join(", "))]
  MissingFields { fields: Vec<&'static str> },

  #[error("attachment is {size_bytes} bytes, which exceeds the {max_bytes} byte limit")]
  AttachmentTooLarge { size_bytes: u64, max_bytes: u64 },

  #[error("attachment type {extension:?} is not allowed")]
  AttachmentTypeNotAllowed { extension: String },
}

/// Reject when any of the named fields is empty or whitespace-only
pub fn require_fields(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
  let missing: Vec<&'static str> =
    fields.iter().filter(|(_, value)| value.trim().is_empty()).map(|(name, _)| *name).collect();

  if missing.is_empty() {
    Ok(())
  } else {
    Err(ValidationError::MissingFields { fields: missing })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn require_fields_names_every_missing_field() {
    let err = require_fields(&[("location", ""), ("category", "Roads"), ("description", "  ")])
      .unwrap_err();
    assert_eq!(err.to_string(), "missing required fields: location, description");
  }

  #[test]
  fn require_fields_accepts_populated_input() {
    assert!(require_fields(&[("location", "Main St"), ("category", "Roads")]).is_ok());
  }
}
