use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shortcut_core::UrlRecord;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::extract::JsonBody;
use crate::model::{CreateRequest, CreateResponse, LookupRequest, LookupResponse};
use crate::state::AppState;

pub async fn lookup_url_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LookupRequest>,
) -> Result<Json<LookupResponse>> {
    let original_url = state
        .storage()
        .lookup(&request.short_url)
        .await
        .map_err(|err| {
            debug!(short_code = %request.short_url, error = %err, "lookup failed");
            AppError::from_lookup(err)
        })?;

    Ok(Json(LookupResponse { original_url }))
}

pub async fn create_url_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRequest>,
) -> Result<(StatusCode, Json<CreateResponse>)> {
    if request.url.is_empty() || request.short_url.is_empty() {
        return Err(AppError::InvalidRequest);
    }

    let record = UrlRecord::new(request.url, request.short_url.clone());
    state.storage().create(record).await.map_err(|err| {
        debug!(short_code = %request.short_url, error = %err, "create failed");
        AppError::from_create(err)
    })?;

    info!(short_code = %request.short_url, "short url created");
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            short_url: request.short_url,
        }),
    ))
}
