//! View rendering
//!
//! askama templates for the landing form and the confirmation page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use leadcall::{LandingContext, View};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    error: Option<&'a str>,
    name: &'a str,
    number: &'a str,
}

impl<'a> From<&'a LandingContext> for LandingTemplate<'a> {
    fn from(context: &'a LandingContext) -> Self {
        Self {
            error: context.error.as_deref(),
            name: &context.name,
            number: &context.number,
        }
    }
}

#[derive(Template)]
#[template(path = "sent.html")]
struct SentTemplate;

/// Render a view to HTML
pub fn render_html(view: &View) -> Result<String, askama::Error> {
    match view {
        View::Landing(context) => LandingTemplate::from(context).render(),
        View::Sent => SentTemplate.render(),
    }
}

/// Render a view into an HTTP response
pub fn render(view: &View) -> Response {
    match render_html(view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(view = view.name(), "Failed to render view: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
