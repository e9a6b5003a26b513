//! Run-length summary statistics over the machine status signal.
//!
//! The status stream is a sequence of {0,1} samples in store order. A single
//! forward pass produces the total counts per status plus the final state of
//! two "continuous run" counters. Pure logic, no database access; the
//! caller fetches the rows and passes them in.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// One machine status observation, consumed in store order.
#[derive(Debug, Clone, Copy)]
pub struct StatusSample {
    pub recorded_at: Timestamp,
    /// Normalized status: 1 = running. Any other value counts as stopped.
    pub status: i16,
}

/// Aggregate counters produced by one summarize pass.
///
/// `ones_count + zeros_count` always equals the number of samples processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub ones_count: i64,
    pub zeros_count: i64,
    pub trailing_zero_run: i64,
    pub trailing_one_run: i64,
}

/// Run-tracking behaviour used by [`summarize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunSemantics {
    /// Historical behaviour of the summary endpoint, kept as the default so
    /// existing consumers see identical numbers: every status change zeroes
    /// BOTH run counters, including the counter just incremented by the
    /// sample that caused the change. A trailing run of length `k` that
    /// started with a flip therefore reports `k - 1`, and alternating data
    /// reports 0.
    #[default]
    Legacy,
    /// Each sample increments its own run counter and resets only the
    /// opposite one, so the trailing fields report the actual maximal
    /// trailing streak.
    Corrected,
}

/// Summarize with [`RunSemantics::Legacy`].
pub fn summarize(samples: &[StatusSample]) -> StatusSummary {
    summarize_with(samples, RunSemantics::Legacy)
}

/// Single-pass fold over `samples` in the order given.
///
/// Total over any input: the empty slice yields an all-zero summary, and a
/// status other than 1 is counted as zero rather than rejected.
pub fn summarize_with(samples: &[StatusSample], semantics: RunSemantics) -> StatusSummary {
    let mut ones_count = 0i64;
    let mut zeros_count = 0i64;
    let mut run_ones = 0i64;
    let mut run_zeros = 0i64;
    let mut prev: Option<i16> = None;

    for sample in samples {
        if sample.status == 1 {
            ones_count += 1;
            run_ones += 1;
            run_zeros = 0;
        } else {
            zeros_count += 1;
            run_zeros += 1;
            run_ones = 0;
        }

        // Legacy flip handling. Note the comparison is on raw status values:
        // two distinct non-binary statuses count as a flip even though both
        // land in the zero bucket above.
        if semantics == RunSemantics::Legacy {
            if let Some(prev_status) = prev {
                if sample.status != prev_status {
                    run_zeros = 0;
                    run_ones = 0;
                }
            }
        }

        prev = Some(sample.status);
    }

    StatusSummary {
        ones_count,
        zeros_count,
        trailing_zero_run: run_zeros,
        trailing_one_run: run_ones,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
