//! Status reading entity model and DTOs.

use machinepulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single machine status/vibration sample as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusReading {
    pub id: DbId,
    /// Sample timestamp, as reported by the machine.
    pub ts: Timestamp,
    /// Normalized machine status: 1 = running, 0 = stopped.
    pub machine_status: i16,
    pub vibration: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new status reading.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatusReading {
    pub ts: Timestamp,
    pub machine_status: i16,
    pub vibration: Option<f64>,
}
