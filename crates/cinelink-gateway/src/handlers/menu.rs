use crate::model::MenuResponse;
use crate::presenter::LinkPresenter;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use cinelink_normalizer::normalize_details;
use serde_json::Value;

/// Normalizes a raw upstream details document and renders its link menu.
pub async fn menu_handler(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Json<MenuResponse> {
    let details = normalize_details(&document);
    let menu = state.presenter().render(&details);

    Json(MenuResponse {
        caption: LinkPresenter::caption(&details),
        details,
        menu,
    })
}
