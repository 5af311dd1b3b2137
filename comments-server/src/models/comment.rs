//! Comment draft validation
//!
//! A draft is what a client submits: name and content only. The id and
//! timestamps are assigned by storage.

use serde::Deserialize;

use super::ValidationError;

/// Maximum length for commenter names, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Candidate comment, not yet persisted
///
/// Missing JSON fields deserialize to empty strings so they are reported
/// as `NameRequired` / `ContentRequired` rather than as a parse failure.
/// Unknown fields (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl CommentDraft {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Validate the draft.
    ///
    /// # Rules (checked in this order)
    /// - name must not be empty
    /// - name must be at most 100 characters (not bytes)
    /// - content must not be empty
    ///
    /// # Example
    /// ```
    /// use comments_server::models::{CommentDraft, ValidationError};
    ///
    /// assert!(CommentDraft::new("Alice", "hi").validate().is_ok());
    /// assert_eq!(
    ///     CommentDraft::new("", "").validate(),
    ///     Err(ValidationError::NameRequired)
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
        }

        if self.content.is_empty() {
            return Err(ValidationError::ContentRequired);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft() {
        assert!(CommentDraft::new("Alice", "hi").validate().is_ok());
        assert!(CommentDraft::new("a", "x").validate().is_ok());
    }

    #[test]
    fn name_checked_before_content() {
        let err = CommentDraft::new("", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);

        let err = CommentDraft::new("n".repeat(101), "").validate().unwrap_err();
        assert_eq!(err, ValidationError::NameTooLong { max: 100 });
    }

    #[test]
    fn rejects_empty_content() {
        let err = CommentDraft::new("Alice", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::ContentRequired);
    }

    #[test]
    fn max_length() {
        // 100 chars should work
        let name_100 = "a".repeat(100);
        assert!(CommentDraft::new(name_100, "x").validate().is_ok());

        // 101 chars should fail
        let name_101 = "a".repeat(101);
        let err = CommentDraft::new(name_101, "x").validate().unwrap_err();
        assert!(matches!(err, ValidationError::NameTooLong { max: 100 }));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 two-byte characters = 200 bytes
        let name = "é".repeat(100);
        assert_eq!(name.len(), 200);
        assert!(CommentDraft::new(name, "x").validate().is_ok());

        let name = "評".repeat(101);
        let err = CommentDraft::new(name, "x").validate().unwrap_err();
        assert!(matches!(err, ValidationError::NameTooLong { .. }));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(CommentDraft::new(" ", " ").validate().is_ok());
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let draft: CommentDraft = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.validate(), Err(ValidationError::NameRequired));
    }
}
