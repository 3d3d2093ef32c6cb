//! View Entity
//!
//! The page a request ends on. Every request renders exactly one view.

use super::LeadSubmission;

/// Shown when a required form field is missing
pub const VALIDATION_ERROR_MESSAGE: &str = "Please fill all required fields!";

/// Shown when the messaging service rejects or fails a send
pub const DISPATCH_ERROR_MESSAGE: &str = "An error occurred while requesting a callback!";

/// Data for the landing form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingContext {
    pub error: Option<String>,
    pub name: String,
    pub number: String,
}

impl LandingContext {
    /// Fresh form: no error, empty fields
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form with an error, echoing back what the visitor typed
    pub fn with_error(error: impl Into<String>, lead: &LeadSubmission) -> Self {
        Self {
            error: Some(error.into()),
            name: lead.name().to_string(),
            number: lead.number().to_string(),
        }
    }
}

/// Terminal view of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing(LandingContext),
    Sent,
}

impl View {
    pub fn landing() -> Self {
        Self::Landing(LandingContext::empty())
    }

    pub fn validation_error(lead: &LeadSubmission) -> Self {
        Self::Landing(LandingContext::with_error(VALIDATION_ERROR_MESSAGE, lead))
    }

    pub fn dispatch_error(lead: &LeadSubmission) -> Self {
        Self::Landing(LandingContext::with_error(DISPATCH_ERROR_MESSAGE, lead))
    }

    /// View name as known to the renderer
    pub fn name(&self) -> &'static str {
        match self {
            Self::Landing(_) => "landing",
            Self::Sent => "sent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_is_blank() {
        assert_eq!(
            View::landing(),
            View::Landing(LandingContext {
                error: None,
                name: String::new(),
                number: String::new(),
            })
        );
    }

    #[test]
    fn test_error_views_echo_values_verbatim() {
        let lead = LeadSubmission::new("  Jane ", "+1 555 <1234>");

        for view in [View::validation_error(&lead), View::dispatch_error(&lead)] {
            let View::Landing(context) = view else {
                panic!("Expected landing view");
            };
            assert_eq!(context.name, "  Jane ");
            assert_eq!(context.number, "+1 555 <1234>");
        }
    }

    #[test]
    fn test_absent_fields_echo_as_empty() {
        let lead = LeadSubmission {
            name: Some("Jane".to_string()),
            number: None,
        };
        let View::Landing(context) = View::validation_error(&lead) else {
            panic!("Expected landing view");
        };
        assert_eq!(context.error.as_deref(), Some(VALIDATION_ERROR_MESSAGE));
        assert_eq!(context.name, "Jane");
        assert_eq!(context.number, "");
    }

    #[test]
    fn test_view_names() {
        assert_eq!(View::landing().name(), "landing");
        assert_eq!(View::Sent.name(), "sent");
    }
}
