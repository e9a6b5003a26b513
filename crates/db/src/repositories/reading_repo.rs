//! Repository for the `status_readings` table (append-only time-series).

use machinepulse_core::frequency::Frequency;
use machinepulse_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::reading::{CreateStatusReading, StatusReading};

/// Column list for `status_readings` SELECT queries (includes `id` and `created_at`).
const COLUMNS: &str = "id, ts, machine_status, vibration, created_at";

/// Column list for INSERT statements (excludes auto-generated `id` and `created_at`).
const INSERT_COLUMNS: &str = "ts, machine_status, vibration";

/// Number of bound parameters per row in a batch insert.
const INSERT_PARAMS: u32 = 3;

/// Provides query operations for status readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a single reading.
    pub async fn insert(
        pool: &PgPool,
        reading: &CreateStatusReading,
    ) -> Result<StatusReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO status_readings ({INSERT_COLUMNS}) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusReading>(&query)
            .bind(reading.ts)
            .bind(reading.machine_status)
            .bind(reading.vibration)
            .fetch_one(pool)
            .await
    }

    /// Batch-insert readings from an ingest request.
    ///
    /// Uses a single multi-row INSERT for efficiency.
    pub async fn insert_batch(
        pool: &PgPool,
        readings: &[CreateStatusReading],
    ) -> Result<(), sqlx::Error> {
        if readings.is_empty() {
            return Ok(());
        }

        // Build a multi-row VALUES clause.
        let mut query = format!("INSERT INTO status_readings ({INSERT_COLUMNS}) VALUES ");

        let mut param_idx = 1u32;
        for (i, _) in readings.iter().enumerate() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push('(');
            for j in 0..INSERT_PARAMS {
                if j > 0 {
                    query.push_str(", ");
                }
                query.push('$');
                query.push_str(&param_idx.to_string());
                param_idx += 1;
            }
            query.push(')');
        }

        let mut q = sqlx::query(&query);
        for r in readings {
            q = q.bind(r.ts).bind(r.machine_status).bind(r.vibration);
        }

        q.execute(pool).await?;
        Ok(())
    }

    /// Fetch every reading in insertion order.
    ///
    /// The summary endpoint consumes rows in the order the store returns
    /// them. Ordering by `id` reproduces insertion order for this
    /// append-only table; `ts` is deliberately not sorted on.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StatusReading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_readings ORDER BY id");
        sqlx::query_as::<_, StatusReading>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch readings within `[start, end]`, refined by the frequency bucket.
    pub async fn list_in_range(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
        frequency: Frequency,
    ) -> Result<Vec<StatusReading>, sqlx::Error> {
        let bucket = bucket_predicate(frequency);
        let query = format!(
            "SELECT {COLUMNS} FROM status_readings \
             WHERE ts >= $1 AND ts <= $2{bucket} \
             ORDER BY id"
        );
        sqlx::query_as::<_, StatusReading>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}

/// SQL fragment appended to the range filter for each frequency bucket.
///
/// `$1` is the range start in every fragment: `Day`, `Week`, and `Month`
/// keep only rows whose timestamp shares the start's day of year, week
/// number, or month. `Hour` is the plain time range.
fn bucket_predicate(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Hour => "",
        Frequency::Day => " AND EXTRACT(DOY FROM ts) = EXTRACT(DOY FROM $1)",
        Frequency::Week => " AND EXTRACT(WEEK FROM ts) = EXTRACT(WEEK FROM $1)",
        Frequency::Month => " AND EXTRACT(MONTH FROM ts) = EXTRACT(MONTH FROM $1)",
    }
}
