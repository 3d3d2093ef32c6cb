//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CallbackForm, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::callback::landing,
        super::callback::request_callback,
        super::health::health_check,
    ),
    info(
        title = "Leadcall",
        version = "0.1.0",
        description = "Lead capture form that forwards callback requests to a random sales agent by SMS.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Callback", description = "Callback - Landing form and lead intake"),
    ),
    components(
        schemas(
            CallbackForm,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
