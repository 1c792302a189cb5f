use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, menu_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(health_handler))
            .route("/health", get(health_handler))
            .route("/r/{token}", get(redirect_handler))
            .nest("/v1", Router::new().route("/menu", post(menu_handler)))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
