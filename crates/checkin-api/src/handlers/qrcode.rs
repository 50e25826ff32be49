//! Credential token handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info};

use checkin_core::error::ErrorKind;

use crate::dto::request::QrcodeParams;
use crate::dto::response::{ApiResponse, QrcodeResponse};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::qrcode::{INVALID_ADDRESS, UNEXPECTED_ERROR, render_credentials, render_message};

/// POST /api/new_qrcode?id
pub async fn new_qrcode(
    State(state): State<AppState>,
    Query(params): Query<QrcodeParams>,
) -> Result<Json<ApiResponse<QrcodeResponse>>, ApiError> {
    let id = params.id()?;
    let qrcode = state.tokens.issue(id).await?;
    Ok(Json(ApiResponse::ok(QrcodeResponse { qrcode })))
}

/// GET /qrcode/{token}
///
/// Public. Each visit is one redemption attempt.
pub async fn qrcode_page(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let config = &state.config.qrcode;
    match state.tokens.redeem(&token).await {
        Ok(info) => Html(render_credentials(config, &info)).into_response(),
        Err(e) if e.kind == ErrorKind::NotFound => {
            info!(message = %e.message, "Credential page with invalid token");
            Html(render_message(config, INVALID_ADDRESS)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Credential page failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_message(config, UNEXPECTED_ERROR)),
            )
                .into_response()
        }
    }
}
