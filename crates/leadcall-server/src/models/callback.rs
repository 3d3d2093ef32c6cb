//! Callback DTOs

use serde::Deserialize;
use utoipa::ToSchema;

use leadcall::LeadSubmission;

/// Form posted by the landing page
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CallbackForm {
    /// Visitor's name
    pub name: Option<String>,
    /// Visitor's phone number
    pub number: Option<String>,
}

impl CallbackForm {
    pub fn into_domain(self) -> LeadSubmission {
        LeadSubmission {
            name: self.name,
            number: self.number,
        }
    }
}
