//! Attachment validation
//!
//! Attachments are validated before any persistence write and only the file
//! name is ever stored; file content handling is out of scope.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validation::ValidationError;

/// Maximum accepted attachment size: 10 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted for issue attachments
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "pdf", "doc", "docx"];

/// Name and size of an attachment offered by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentMeta {
  pub file_name: String,
  pub size_bytes: u64,
}

impl AttachmentMeta {
  /// Build metadata from a file on disk without reading its content
  pub fn from_path(path: &Path) -> anyhow::Result<Self> {
    let file_name = path
      .file_name()
      .ok_or_else(|| anyhow::anyhow!("attachment path has no file name: {}", path.display()))?
      .to_string_lossy()
      .to_string();
    let size_bytes = std::fs::metadata(path)?.len();

    Ok(Self { file_name, size_bytes })
  }
}

/// Check an attachment against the size cap and extension allowlist
pub fn validate(attachment: &AttachmentMeta) -> Result<(), ValidationError> {
  if attachment.size_bytes > MAX_ATTACHMENT_BYTES {
    return Err(ValidationError::AttachmentTooLarge {
      size_bytes: attachment.size_bytes,
      max_bytes: MAX_ATTACHMENT_BYTES,
    });
  }

  let extension = Path::new(&attachment.file_name)
    .extension()
    .map(|ext| ext.to_string_lossy().to_lowercase())
    .unwrap_or_default();

  if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
    return Err(ValidationError::AttachmentTypeNotAllowed { extension });
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_allowed_extensions_case_insensitively() {
    for name in ["photo.jpg", "photo.JPG", "scan.Pdf", "notes.docx"] {
      let meta = AttachmentMeta { file_name: name.to_string(), size_bytes: 1024 };
      assert!(validate(&meta).is_ok(), "{name} should be accepted");
    }
  }

  #[test]
  fn rejects_disallowed_extension() {
    let meta = AttachmentMeta { file_name: "payload.exe".to_string(), size_bytes: 10 };
    let err = validate(&meta).unwrap_err();
    assert!(err.to_string().contains("exe"));
  }

  #[test]
  fn rejects_missing_extension() {
    let meta = AttachmentMeta { file_name: "README".to_string(), size_bytes: 10 };
    assert!(validate(&meta).is_err());
  }

  #[test]
  fn rejects_oversized_file() {
    let meta =
      AttachmentMeta { file_name: "big.png".to_string(), size_bytes: MAX_ATTACHMENT_BYTES + 1 };
    assert!(validate(&meta).is_err());
  }

  #[test]
  fn accepts_file_at_exact_size_limit() {
    let meta =
      AttachmentMeta { file_name: "edge.png".to_string(), size_bytes: MAX_ATTACHMENT_BYTES };
    assert!(validate(&meta).is_ok());
  }
}
