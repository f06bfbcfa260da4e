//! Validated text value objects
//!
//! Lengths are counted in Unicode scalar values after trimming surrounding
//! whitespace.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum idea length (characters, after trimming)
pub const MIN_IDEA_CHARS: usize = 3;
/// Maximum idea length (characters, after trimming)
pub const MAX_IDEA_CHARS: usize = 200;
/// Maximum participant display name length
pub const MAX_DISPLAY_NAME_CHARS: usize = 40;

/// The text of an idea (Value Object)
///
/// # Example
///
/// ```
/// use idea_domain::IdeaText;
///
/// let text = IdeaText::parse("  Team picnic  ").unwrap();
/// assert_eq!(text.as_str(), "Team picnic");
///
/// assert!(IdeaText::parse("ok").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaText(String);

impl IdeaText {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < MIN_IDEA_CHARS {
            return Err(DomainError::InvalidContent(format!(
                "idea must be at least {} characters",
                MIN_IDEA_CHARS
            )));
        }
        if len > MAX_IDEA_CHARS {
            return Err(DomainError::InvalidContent(format!(
                "idea must be at most {} characters, got {}",
                MAX_IDEA_CHARS, len
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdeaText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's display name (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidContent(
                "display name cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_DISPLAY_NAME_CHARS {
            return Err(DomainError::InvalidContent(format!(
                "display name must be at most {} characters",
                MAX_DISPLAY_NAME_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_text_bounds() {
        assert!(IdeaText::parse("abc").is_ok());
        assert!(IdeaText::parse("ab").is_err());
        assert!(IdeaText::parse(&"x".repeat(200)).is_ok());
        assert!(IdeaText::parse(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_idea_text_trims_before_counting() {
        // Two visible characters padded with whitespace is still too short
        let err = IdeaText::parse("   ab   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidContent(_)));

        let padded = format!("  {}  ", "y".repeat(200));
        assert_eq!(IdeaText::parse(&padded).unwrap().as_str().len(), 200);
    }

    #[test]
    fn test_idea_text_counts_characters_not_bytes() {
        // Three multi-byte characters are a valid idea
        assert!(IdeaText::parse("日本語").is_ok());
        assert!(IdeaText::parse(&"é".repeat(200)).is_ok());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DisplayName::parse("  Ada ").unwrap().as_str(), "Ada");
        assert!(DisplayName::parse("   ").is_err());
        assert!(DisplayName::parse(&"n".repeat(41)).is_err());
    }
}
