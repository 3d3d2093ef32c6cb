use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod views;

#[cfg(test)]
mod test_support;

use adapters::MessageBirdClient;
use application::CallbackService;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub callback_service: Arc<CallbackService>,
}

/// Build the full router with shared state
fn app(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::callback::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📞 Leadcall initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key))
        .context("Invalid Leadcall configuration")?;

    tracing::info!(
        "📇 Agent directory loaded ({} agents, originator {})",
        config.agents.len(),
        config.originator
    );

    let messagebird = MessageBirdClient::new(config.api_key)
        .context("Failed to initialize MessageBird client")?
        .with_base_url(config.base_url);

    tracing::info!("✉️  MessageBird client initialized");

    let state = AppState {
        callback_service: Arc::new(CallbackService::new(
            Arc::new(messagebird),
            config.originator,
            config.agents,
        )),
    };

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Leadcall ready - waiting for leads");

    Ok(app(state).into())
}
