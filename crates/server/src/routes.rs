use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod auth;
pub mod requests;

/// Plain confirmation payload shared by the write endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageOutput {
    pub message: String,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message")))]
pub async fn root() -> Json<MessageOutput> {
    Json(MessageOutput {
        message: "Welcome to the ElderCare API".to_string(),
    })
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is running")))]
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: "Service is running",
    })
}

/// Build the full application router: liveness routes, the API surface,
/// Swagger UI, CORS, and request tracing.
pub fn build_router(cors: CorsLayer, state: auth::ServerState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let api = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/service-request", post(requests::create))
        .route("/service-requests/pending", get(requests::pending))
        .route("/service-request/:id/:action", patch(requests::handle_action));

    public
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
