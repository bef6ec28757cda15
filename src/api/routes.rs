use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health::health_check;
use super::screenings::{create_screening, list_models, AppState};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/predict", post(create_screening))
        .route("/models", get(list_models))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the bundled screening form
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
