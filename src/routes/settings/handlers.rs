use axum::{Json, extract::State};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::repository::settings;

use super::types::{SettingsPayload, SettingsResponse, UpdateSettingsResponse};

/// Get the current settings record
#[utoipa::path(
    get,
    path = "/api/readings/settings",
    responses(
        (status = 200, description = "Settings retrieved successfully", body = SettingsResponse),
        (status = 404, description = "No settings exist yet"),
    ),
    tag = "settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SettingsResponse>> {
    let record = settings::get(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No settings found".to_string()))?;

    Ok(Json(record.into()))
}

/// Create or update the settings record
#[utoipa::path(
    put,
    path = "/api/readings/settings",
    request_body = SettingsPayload,
    responses(
        (status = 200, description = "Settings updated successfully", body = UpdateSettingsResponse),
        (status = 400, description = "Missing or invalid field"),
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsPayload>,
) -> AppResult<Json<UpdateSettingsResponse>> {
    tracing::debug!(?payload, "received settings update request");
    let record = payload.normalize()?;

    // This is the one write path where the client gets the underlying
    // error text back; the dashboard surfaces it during commissioning.
    settings::upsert(&state.db, &record)
        .await
        .map_err(|e| AppError::SettingsWrite(e.to_string()))?;

    Ok(Json(UpdateSettingsResponse {
        message: "Settings updated successfully".to_string(),
        data: record,
    }))
}
