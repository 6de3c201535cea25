//! Settings handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::models::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::models::whiskey::ErrorResponse;
use crate::services::settings;
use crate::AppState;

fn settings_error(
    e: Box<dyn std::error::Error + Send + Sync>,
) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %e, "Settings operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Settings error: {}", e),
        }),
    )
}

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let settings = settings::load(&state.db).await.map_err(settings_error)?;
    Ok(Json(SettingsResponse::from(settings)))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let settings = settings::save(
        &state.db,
        payload.auto_update_enabled,
        payload.price_alert_threshold,
    )
    .await
    .map_err(settings_error)?;

    info!(
        auto_update_enabled = settings.auto_update_enabled,
        "Settings saved"
    );
    Ok(Json(SettingsResponse::from(settings)))
}

/// POST /api/settings/reset
pub async fn reset_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let settings = settings::reset(&state.db).await.map_err(settings_error)?;
    info!("Settings reset to defaults");
    Ok(Json(SettingsResponse::from(settings)))
}
