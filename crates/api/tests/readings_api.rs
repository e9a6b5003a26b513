//! Integration tests for the readings endpoints (ingest, summary, filter).

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Ingest a batch of readings spaced a minute apart, statuses as given.
async fn ingest_statuses(pool: &PgPool, statuses: &[i16]) {
    let readings: Vec<_> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            json!({
                "ts": format!("2024-03-01T12:{:02}:00Z", i),
                "machine_status": status,
                "vibration": 0.2,
            })
        })
        .collect();

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/readings", json!({ "readings": readings })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_on_empty_store_is_all_zeros(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/readings/summary").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body["data"]["summary_table"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert_eq!(row["value"], 0);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_reports_counts_and_trailing_run(pool: PgPool) {
    ingest_statuses(&pool, &[1, 1, 1]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/readings/summary").await;
    let body = body_json(response).await;

    let rows = body["data"]["summary_table"].as_array().unwrap();
    assert_eq!(rows[0]["label"], "Number of 1s");
    assert_eq!(rows[0]["value"], 3);
    assert_eq!(rows[1]["label"], "Number of 0s");
    assert_eq!(rows[1]["value"], 0);
    assert_eq!(rows[2]["label"], "Continuous 0s");
    assert_eq!(rows[2]["value"], 0);
    assert_eq!(rows[3]["label"], "Continuous 1s");
    assert_eq!(rows[3]["value"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_modes_differ_on_alternating_data(pool: PgPool) {
    ingest_statuses(&pool, &[1, 0, 1]).await;

    // Legacy (default): the trailing singleton run reads 0.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/readings/summary").await;
    let body = body_json(response).await;
    let rows = body["data"]["summary_table"].as_array().unwrap();
    assert_eq!(rows[0]["value"], 2);
    assert_eq!(rows[1]["value"], 1);
    assert_eq!(rows[3]["value"], 0);

    // Corrected: the trailing singleton run reads 1.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/readings/summary?mode=corrected").await;
    let body = body_json(response).await;
    let rows = body["data"]["summary_table"].as_array().unwrap();
    assert_eq!(rows[3]["value"], 1);
}

// ---------------------------------------------------------------------------
// Ingest
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn ingest_returns_inserted_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/readings",
        json!({
            "readings": [
                { "ts": "2024-03-01T12:00:00Z", "machine_status": 1, "vibration": 0.2 },
                { "ts": "2024-03-01T12:01:00Z", "machine_status": 0, "vibration": null },
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["inserted"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_ingest_batch_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/readings", json!({ "readings": [] })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_returns_rows_in_range(pool: PgPool) {
    ingest_statuses(&pool, &[1, 0, 1]).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/readings/filter\
         ?start_time=2024-03-01T12:00:30Z\
         &end_time=2024-03-01T12:02:30Z\
         &frequency=hour",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["machine_status"], 0);
    assert_eq!(rows[1]["machine_status"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_rejects_inverted_range(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/readings/filter\
         ?start_time=2024-03-02T00:00:00Z\
         &end_time=2024-03-01T00:00:00Z\
         &frequency=hour",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_rejects_unknown_frequency(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/readings/filter\
         ?start_time=2024-03-01T00:00:00Z\
         &end_time=2024-03-02T00:00:00Z\
         &frequency=quarter",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
