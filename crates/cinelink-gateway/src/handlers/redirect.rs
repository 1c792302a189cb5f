use crate::error::{GatewayError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use cinelink_core::Token;
use cinelink_redirect::Resolution;
use tracing::debug;

pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let token = Token::parse(token)?;

    match state.redirector().resolve(&token) {
        Resolution::Found(url) => {
            let location =
                HeaderValue::from_bytes(url.as_bytes()).map_err(|_| GatewayError::InvalidTarget)?;
            debug!(token = %token, url = %url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Resolution::NotFound => Err(GatewayError::NotFound),
        Resolution::Expired => Err(GatewayError::Expired),
    }
}
