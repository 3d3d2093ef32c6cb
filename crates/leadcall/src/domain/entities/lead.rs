//! Lead Entity
//!
//! A prospective customer's contact details, as posted by the landing form.

use crate::domain::errors::DomainError;

/// A lead as submitted by a visitor
///
/// Both fields are free-form text and either may be missing from the form
/// post. Nothing is trimmed or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl LeadSubmission {
    /// Create a submission with both fields present
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Submitted name, or an empty string when absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Submitted number, or an empty string when absent
    pub fn number(&self) -> &str {
        self.number.as_deref().unwrap_or_default()
    }

    /// Check that both required fields are present and non-empty
    ///
    /// Whitespace-only values pass.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [("name", self.name()), ("number", self.number())]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// SMS body announcing this lead to an agent
    pub fn notification_body(&self) -> String {
        format!(
            "You have a new lead: {}. Call them at {}",
            self.name(),
            self.number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission_is_valid() {
        let lead = LeadSubmission::new("Jane", "555-1234");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_missing_or_empty_fields_are_invalid() {
        let cases = [
            LeadSubmission::default(),
            LeadSubmission::new("", ""),
            LeadSubmission::new("Jane", ""),
            LeadSubmission::new("", "555-1234"),
            LeadSubmission {
                name: Some("Jane".to_string()),
                number: None,
            },
            LeadSubmission {
                name: None,
                number: Some("555-1234".to_string()),
            },
        ];

        for lead in cases {
            assert!(
                matches!(lead.validate(), Err(DomainError::Validation(_))),
                "expected {lead:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validation_names_missing_fields() {
        let err = LeadSubmission::new("", "").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: missing required fields: name, number"
        );
    }

    #[test]
    fn test_whitespace_only_passes() {
        let lead = LeadSubmission::new("   ", " ");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_notification_body() {
        let lead = LeadSubmission::new("Jane", "555-1234");
        assert_eq!(
            lead.notification_body(),
            "You have a new lead: Jane. Call them at 555-1234"
        );
    }
}
