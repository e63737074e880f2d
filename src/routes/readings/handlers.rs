use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::repository::readings;

use super::types::{
    CreateReadingResponse, HistoryQuery, ReadingPayload, ReadingResponse, TimespanQuery,
    parse_timespan,
};

const DEFAULT_HISTORY_LIMIT: u64 = 100;

/// Get the most recent reading
#[utoipa::path(
    get,
    path = "/api/readings/latest",
    responses(
        (status = 200, description = "Latest reading retrieved successfully", body = ReadingResponse),
        (status = 404, description = "No readings exist yet"),
    ),
    tag = "readings"
)]
pub async fn get_latest_reading(
    State(state): State<AppState>,
) -> AppResult<Json<ReadingResponse>> {
    let reading = readings::latest(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No readings found".to_string()))?;

    Ok(Json(reading.into()))
}

/// Get recent readings, most recent first
#[utoipa::path(
    get,
    path = "/api/readings/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Readings retrieved successfully", body = Vec<ReadingResponse>),
    ),
    tag = "readings"
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<ReadingResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let readings_list = readings::history(&state.db, limit).await?;

    Ok(Json(readings_list.into_iter().map(Into::into).collect()))
}

/// Get readings within a trailing window, oldest first
#[utoipa::path(
    get,
    path = "/api/readings/history/timespan",
    params(TimespanQuery),
    responses(
        (status = 200, description = "Readings retrieved successfully", body = Vec<ReadingResponse>),
    ),
    tag = "readings"
)]
pub async fn get_history_by_timespan(
    State(state): State<AppState>,
    Query(query): Query<TimespanQuery>,
) -> AppResult<Json<Vec<ReadingResponse>>> {
    let token = query.timespan.as_deref().unwrap_or("5m");
    let seconds = parse_timespan(token);
    tracing::debug!(timespan = %token, seconds, "timespan query");

    let readings_list = readings::history_by_timespan(&state.db, seconds).await?;
    tracing::debug!(count = readings_list.len(), "readings retrieved for timespan");

    Ok(Json(readings_list.into_iter().map(Into::into).collect()))
}

/// Ingest one reading from the device
#[utoipa::path(
    post,
    path = "/api/readings",
    request_body = ReadingPayload,
    responses(
        (status = 201, description = "Reading created successfully", body = CreateReadingResponse),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(state): State<AppState>,
    Json(payload): Json<ReadingPayload>,
) -> AppResult<(StatusCode, Json<CreateReadingResponse>)> {
    // Old firmware sends a source field on ingest; log it for diagnosis
    // but never store it (it lives on the settings record).
    let source = payload.source.clone().unwrap_or_else(|| "DC".to_string());
    let record = payload.into_record()?;
    tracing::debug!(?record, %source, "received sensor data from device");

    let id = readings::insert(&state.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReadingResponse {
            message: "Reading created successfully".to_string(),
            id,
        }),
    ))
}
