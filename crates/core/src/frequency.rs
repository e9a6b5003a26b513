//! Closed set of date-bucket refinements for the readings filter.

use serde::{Deserialize, Serialize};

/// Frequency selector for the readings filter endpoint.
///
/// Each variant maps to an explicit date-bucket predicate over the range
/// start (see the readings repository): `Hour` keeps the plain time range,
/// the others additionally keep only samples sharing the start's day of
/// year, week number, or month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hour,
    Day,
    Week,
    Month,
}

impl Frequency {
    /// Stable lowercase name, matching the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Hour => "hour",
            Frequency::Day => "day",
            Frequency::Week => "week",
            Frequency::Month => "month",
        }
    }
}
