//! Feedback records and the rules a submission has to pass
//!
//! Entries are append-only: they are created from a validated
//! [`FeedbackForm`] and never edited afterwards.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 3;

/// File extensions accepted for attachments (compared case-insensitively)
pub const ATTACHMENT_EXTENSIONS: &[&str] = &["png", "jpg", "pdf", "txt", "docx"];

/// `localpart@domain.tld` shape check, intentionally looser than RFC 5322
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w\.-]+@[\w\.-]+\.\w+$").expect("email pattern is a valid regex")
});

/// Reasons a submission is rejected before anything is written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Please enter a valid email address or leave it blank")]
    InvalidEmail,

    #[error("Attachment '{0}' must be one of: png, jpg, pdf, txt, docx")]
    UnsupportedAttachment(String),
}

/// Topics a reader can ask to see next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestedTopic {
    #[serde(rename = "LLM APIs")]
    LlmApis,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "Tool Comparisons")]
    ToolComparisons,
    #[serde(rename = "No-code Prototyping")]
    NoCodePrototyping,
}

impl SuggestedTopic {
    pub const ALL: [SuggestedTopic; 4] = [
        SuggestedTopic::LlmApis,
        SuggestedTopic::CustomerSupport,
        SuggestedTopic::ToolComparisons,
        SuggestedTopic::NoCodePrototyping,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SuggestedTopic::LlmApis => "LLM APIs",
            SuggestedTopic::CustomerSupport => "Customer Support",
            SuggestedTopic::ToolComparisons => "Tool Comparisons",
            SuggestedTopic::NoCodePrototyping => "No-code Prototyping",
        }
    }

    /// Parse a label; "None" and unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.label() == label)
    }
}

impl fmt::Display for SuggestedTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of checking the name/email pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub name_ok: bool,
    pub email_ok: bool,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.name_ok && self.email_ok
    }

    /// First failing field as an error, name before email
    pub fn into_result(self) -> Result<(), ValidationError> {
        if !self.name_ok {
            Err(ValidationError::EmptyName)
        } else if !self.email_ok {
            Err(ValidationError::InvalidEmail)
        } else {
            Ok(())
        }
    }
}

/// Check a name/email pair the way the feedback form does
pub fn validate(name: &str, email: &str) -> Validation {
    let email = email.trim();
    Validation {
        name_ok: !name.trim().is_empty(),
        email_ok: email.is_empty() || is_valid_email(email),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_supported_attachment(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ATTACHMENT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Raw form input as typed by the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comment: String,
    pub suggested_topic: Option<SuggestedTopic>,
    pub attachment_name: Option<String>,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            rating: DEFAULT_RATING,
            comment: String::new(),
            suggested_topic: None,
            attachment_name: None,
        }
    }
}

impl FeedbackForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, rating: u8) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            rating,
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_topic(mut self, topic: SuggestedTopic) -> Self {
        self.suggested_topic = Some(topic);
        self
    }

    pub fn with_attachment(mut self, file_name: impl Into<String>) -> Self {
        self.attachment_name = Some(file_name.into());
        self
    }

    /// Name/email check only, used to enable the submit button
    pub fn validation(&self) -> Validation {
        validate(&self.name, &self.email)
    }

    /// Full check run before an entry is created
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validation().into_result()?;
        if let Some(file_name) = &self.attachment_name {
            if !is_supported_attachment(file_name) {
                return Err(ValidationError::UnsupportedAttachment(file_name.clone()));
            }
        }
        Ok(())
    }

    /// Turn the form into an entry with trimmed text and a clamped rating
    pub fn into_entry(self, sequence_number: u32) -> FeedbackEntry {
        FeedbackEntry {
            sequence_number,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            rating: self.rating.clamp(MIN_RATING, MAX_RATING),
            comment: self.comment.trim().to_string(),
            suggested_topic: self.suggested_topic,
            attachment_name: self.attachment_name,
        }
    }
}

/// One persisted feedback record; field names match the CSV header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// 1-based, assigned at insertion
    #[serde(rename = "S.No")]
    pub sequence_number: u32,

    #[serde(rename = "Name")]
    pub name: String,

    /// Empty when the reader left it blank
    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Rating")]
    pub rating: u8,

    #[serde(rename = "Feedback")]
    pub comment: String,

    #[serde(rename = "Suggested topic")]
    pub suggested_topic: Option<SuggestedTopic>,

    #[serde(rename = "Attachment name")]
    pub attachment_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cases() {
        assert!(!validate("", "").is_valid());
        assert!(validate("Alex", "").is_valid());
        assert!(validate("Alex", "alex@example.com").is_valid());
        assert!(!validate("Alex", "not-an-email").is_valid());
    }

    #[test]
    fn test_validate_whitespace() {
        let blank_name = validate("   ", "");
        assert!(!blank_name.name_ok);
        assert!(blank_name.email_ok);

        assert!(validate("Alex", "   ").is_valid());
        assert!(validate("Alex", "  alex@example.com  ").is_valid());
    }

    #[test]
    fn test_email_pattern_permissiveness() {
        assert!(is_valid_email("first.last-x@sub.domain.io"));
        assert!(is_valid_email("a_b@c.d"));
        assert!(is_valid_email("..@..x.y"));
        assert!(!is_valid_email("alex@example"));
        assert!(!is_valid_email("alex example@x.com"));
        assert!(!is_valid_email("alex+tag@example.com"));
        assert!(!is_valid_email("alex@example."));
    }

    #[test]
    fn test_into_result_orders_name_first() {
        assert_eq!(
            validate("", "bad").into_result(),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate("Alex", "bad").into_result(),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate("Alex", "").into_result(), Ok(()));
    }

    #[test]
    fn test_attachment_extension_check() {
        let ok = FeedbackForm::new("Alex", "", 4).with_attachment("Notes.PDF");
        assert!(ok.check().is_ok());

        let bad = FeedbackForm::new("Alex", "", 4).with_attachment("script.exe");
        assert_eq!(
            bad.check(),
            Err(ValidationError::UnsupportedAttachment("script.exe".to_string()))
        );

        let no_ext = FeedbackForm::new("Alex", "", 4).with_attachment("README");
        assert!(no_ext.check().is_err());
    }

    #[test]
    fn test_into_entry_trims_and_clamps() {
        let entry = FeedbackForm::new("  Jane Doe ", " jane@example.com ", 9)
            .with_comment("  Great guide\n")
            .with_topic(SuggestedTopic::ToolComparisons)
            .into_entry(7);

        assert_eq!(entry.sequence_number, 7);
        assert_eq!(entry.name, "Jane Doe");
        assert_eq!(entry.email, "jane@example.com");
        assert_eq!(entry.rating, MAX_RATING);
        assert_eq!(entry.comment, "Great guide");
        assert_eq!(entry.suggested_topic, Some(SuggestedTopic::ToolComparisons));

        let low = FeedbackForm::new("Jane", "", 0).into_entry(1);
        assert_eq!(low.rating, MIN_RATING);
    }

    #[test]
    fn test_topic_labels() {
        for topic in SuggestedTopic::ALL {
            assert_eq!(SuggestedTopic::from_label(topic.label()), Some(topic));
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.label()));
        }
        assert_eq!(SuggestedTopic::from_label("None"), None);
    }

    #[test]
    fn test_default_form_rating() {
        assert_eq!(FeedbackForm::default().rating, DEFAULT_RATING);
    }
}
