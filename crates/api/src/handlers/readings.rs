//! Handlers for the status readings endpoints.
//!
//! Includes the run-length summary, the time-range/frequency filter, and
//! batch ingestion. The summary fold itself lives in `machinepulse-core`;
//! these handlers only fetch rows, feed them through, and serialize.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use machinepulse_core::frequency::Frequency;
use machinepulse_core::summary::{summarize_with, RunSemantics, StatusSample, StatusSummary};
use machinepulse_core::types::Timestamp;
use machinepulse_db::models::reading::{CreateStatusReading, StatusReading};
use machinepulse_db::repositories::ReadingRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Run-tracking behaviour (default: legacy).
    pub mode: Option<RunSemantics>,
}

/// One row of the rendered summary table.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: i64,
}

/// Response payload for the summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary_table: Vec<SummaryRow>,
}

/// Query parameters for the filter endpoint.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub frequency: Frequency,
}

/// Request body for batch ingestion.
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub readings: Vec<CreateStatusReading>,
}

/// Response payload for batch ingestion.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub inserted: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /readings/summary
///
/// Fetch every reading in insertion order and reduce it to the four-row
/// summary table.
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<DataResponse<SummaryResponse>>> {
    let readings = ReadingRepo::list_all(&state.pool).await?;

    let samples: Vec<StatusSample> = readings.iter().map(to_sample).collect();
    let summary = summarize_with(&samples, query.mode.unwrap_or_default());

    Ok(Json(DataResponse {
        data: SummaryResponse {
            summary_table: summary_table(&summary),
        },
    }))
}

/// GET /readings/filter
///
/// Readings within a time range, refined by the frequency bucket.
pub async fn filter_readings(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Json<DataResponse<Vec<StatusReading>>>> {
    if query.start_time > query.end_time {
        return Err(AppError::BadRequest(
            "start_time must not be after end_time".to_string(),
        ));
    }

    let readings =
        ReadingRepo::list_in_range(&state.pool, query.start_time, query.end_time, query.frequency)
            .await?;
    Ok(Json(DataResponse { data: readings }))
}

/// POST /readings
///
/// Batch-insert status readings.
pub async fn ingest_readings(
    State(state): State<AppState>,
    Json(input): Json<IngestRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<IngestResponse>>)> {
    if input.readings.is_empty() {
        return Err(AppError::BadRequest(
            "readings must not be empty".to_string(),
        ));
    }

    ReadingRepo::insert_batch(&state.pool, &input.readings).await?;
    tracing::debug!(count = input.readings.len(), "Ingested status readings");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: IngestResponse {
                inserted: input.readings.len(),
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a stored reading to the summarizer's input shape.
fn to_sample(reading: &StatusReading) -> StatusSample {
    StatusSample {
        recorded_at: reading.ts,
        status: reading.machine_status,
    }
}

/// Render the summary counters as the fixed-order label/value table.
fn summary_table(summary: &StatusSummary) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            label: "Number of 1s",
            value: summary.ones_count,
        },
        SummaryRow {
            label: "Number of 0s",
            value: summary.zeros_count,
        },
        SummaryRow {
            label: "Continuous 0s",
            value: summary.trailing_zero_run,
        },
        SummaryRow {
            label: "Continuous 1s",
            value: summary.trailing_one_run,
        },
    ]
}
