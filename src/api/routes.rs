//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::{HealthResponse, MessageResponse};
use crate::error::Result;
use crate::middleware;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Gateway API",
        version = "0.1.0",
        description = "HTTP front door for the customer registration API.",
        license(name = "MIT"),
    ),
    paths(
        handlers::add_customer,
        handlers::health,
    ),
    components(schemas(
        MessageResponse,
        HealthResponse,
    )),
    tags(
        (name = "Customers", description = "Customer registration endpoints"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router.
///
/// The route table is built once here and is immutable afterwards. The
/// CORS layer wraps the whole router so unmatched-route responses carry
/// the policy too.
pub fn create_router(state: Arc<crate::AppState>) -> Result<Router> {
    let cors = middleware::cors::cors_layer(&state.settings.cors)?;

    Ok(Router::new()
        // Customer registration endpoint
        .route("/add_customer", post(handlers::add_customer))
        // Health check endpoint
        .route("/health", get(handlers::health))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add shared state
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
        // Cross-origin policy, applied to every response including 404s
        .layer(cors))
}
