//! Callback Routes - Lead intake
//!
//! HTML handlers for the landing form and callback requests.
//! Every outcome, including failures, is a rendered page.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Response,
    routing::{get, post},
    Form, Router,
};

use leadcall::{LeadSubmission, View};

use crate::models::CallbackForm;
use crate::views;
use crate::AppState;

/// Show the landing form
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Empty landing form", body = String, content_type = "text/html")
    ),
    tag = "Callback"
)]
pub async fn landing() -> Response {
    views::render(&View::landing())
}

/// Request a callback from a sales agent
///
/// A body that cannot be decoded as a form is treated as an empty
/// submission and gets the validation error page.
#[utoipa::path(
    post,
    path = "/callme",
    request_body(content = CallbackForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation page, or the landing form with an error", body = String, content_type = "text/html"),
        (status = 500, description = "Page could not be rendered")
    ),
    tag = "Callback"
)]
pub async fn request_callback(
    State(state): State<AppState>,
    form: Result<Form<CallbackForm>, FormRejection>,
) -> Response {
    let lead = match form {
        Ok(Form(form)) => form.into_domain(),
        Err(rejection) => {
            tracing::warn!("Unreadable callback form: {}", rejection);
            LeadSubmission::default()
        }
    };

    let view = state.callback_service.request_callback(lead).await;
    views::render(&view)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/callme", post(request_callback))
}
