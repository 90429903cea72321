//! Verse records and insertion requests

use crate::category::EmotionCategory;
use crate::error::{Result, VerseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique verse identifier, assigned in strictly increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseId(pub u64);

impl VerseId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored verse. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: VerseId,
    pub emotion: EmotionCategory,
    pub text: String,
    pub reference: String,
    pub personal_message: String,
    pub created_at: DateTime<Utc>,
}

impl Verse {
    /// Shareable one-line form: `"text" - reference`
    pub fn quote(&self) -> String {
        format!("\"{}\" - {}", self.text, self.reference)
    }
}

/// Validated verse contents awaiting an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVerse {
    pub emotion: EmotionCategory,
    pub text: String,
    pub reference: String,
    pub personal_message: String,
}

impl NewVerse {
    pub fn new(
        emotion: EmotionCategory,
        text: impl Into<String>,
        reference: impl Into<String>,
        personal_message: impl Into<String>,
    ) -> Self {
        Self {
            emotion,
            text: text.into(),
            reference: reference.into(),
            personal_message: personal_message.into(),
        }
    }

    /// Check required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(VerseError::InvalidInput("text must not be empty".into()));
        }
        if self.reference.trim().is_empty() {
            return Err(VerseError::InvalidInput("reference must not be empty".into()));
        }
        Ok(())
    }
}

/// Insertion request as it arrives from a transport, category still a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVerseRequest {
    pub emotion: String,
    pub text: String,
    pub reference: String,
    #[serde(default)]
    pub personal_message: String,
}

impl AddVerseRequest {
    /// Parse the category and check required fields
    pub fn validate(self) -> Result<NewVerse> {
        let emotion: EmotionCategory = self.emotion.parse()?;
        let verse = NewVerse {
            emotion,
            text: self.text,
            reference: self.reference,
            personal_message: self.personal_message,
        };
        verse.validate()?;
        Ok(verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(emotion: &str, text: &str, reference: &str) -> AddVerseRequest {
        AddVerseRequest {
            emotion: emotion.into(),
            text: text.into(),
            reference: reference.into(),
            personal_message: "msg".into(),
        }
    }

    #[test]
    fn test_request_validation() {
        let verse = request("happy", "Rejoice always.", "1 Thessalonians 5:16")
            .validate()
            .unwrap();
        assert_eq!(verse.emotion, EmotionCategory::Happy);
        assert_eq!(verse.reference, "1 Thessalonians 5:16");
    }

    #[test]
    fn test_request_rejects_unknown_category_first() {
        let err = request("bored", "", "").validate().unwrap_err();
        assert!(matches!(err, VerseError::InvalidCategory(c) if c == "bored"));
    }

    #[test]
    fn test_request_rejects_blank_fields() {
        let err = request("sad", "   ", "Psalm 34:18").validate().unwrap_err();
        assert!(matches!(err, VerseError::InvalidInput(_)));

        let err = request("sad", "The Lord is close.", "").validate().unwrap_err();
        assert!(matches!(err, VerseError::InvalidInput(_)));
    }

    #[test]
    fn test_request_wire_form() {
        let json = r#"{"emotion":"lonely","text":"I am with you.","reference":"Matthew 28:20","personalMessage":"You are held."}"#;
        let parsed: AddVerseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.personal_message, "You are held.");

        let json = r#"{"emotion":"lonely","text":"I am with you.","reference":"Matthew 28:20"}"#;
        let parsed: AddVerseRequest = serde_json::from_str(json).unwrap();
        assert!(parsed.personal_message.is_empty());
    }

    #[test]
    fn test_verse_wire_form() {
        let verse = Verse {
            id: VerseId(7),
            emotion: EmotionCategory::Guidance,
            text: "Your word is a lamp for my feet.".into(),
            reference: "Psalm 119:105".into(),
            personal_message: "One step at a time.".into(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&verse).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["emotion"], "guidance");
        assert_eq!(value["personalMessage"], "One step at a time.");
        assert!(value["createdAt"].is_string());
        assert_eq!(verse.quote(), "\"Your word is a lamp for my feet.\" - Psalm 119:105");
    }
}
