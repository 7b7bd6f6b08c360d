//! Domain Value Objects

use std::fmt;

use crate::error::{ProjectError, ProjectResult};

pub use kernel::id::{ProjectId, UserId};

/// Maximum project name length in characters
pub const NAME_MAX_CHARS: usize = 128;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 4096;

/// Project name: trimmed, non-empty, bounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: impl AsRef<str>) -> ProjectResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(ProjectError::InvalidField(
                "name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ProjectError::InvalidField(format!(
                "name must be at most {NAME_MAX_CHARS} characters"
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(ProjectError::InvalidField(
                "name must not contain control characters".to_string(),
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Trusted value read back from storage
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form project description; empty when not given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    pub fn new(raw: Option<String>) -> ProjectResult<Self> {
        let description = raw.unwrap_or_default();

        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ProjectError::InvalidField(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }

        Ok(Self(description))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(ProjectName::new("  Apollo ").unwrap().as_str(), "Apollo");
    }

    #[test]
    fn test_name_bounds() {
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("   ").is_err());
        assert!(ProjectName::new("a\u{0007}b").is_err());
        assert!(ProjectName::new("x".repeat(NAME_MAX_CHARS)).is_ok());
        assert!(ProjectName::new("x".repeat(NAME_MAX_CHARS + 1)).is_err());
        // counted in characters, not bytes
        assert!(ProjectName::new("é".repeat(NAME_MAX_CHARS)).is_ok());
    }

    #[test]
    fn test_description() {
        assert_eq!(ProjectDescription::new(None).unwrap().as_str(), "");
        assert_eq!(
            ProjectDescription::new(Some("notes".into())).unwrap().as_str(),
            "notes"
        );
        assert!(ProjectDescription::new(Some("x".repeat(DESCRIPTION_MAX_CHARS + 1))).is_err());
    }
}
