//! Pure domain logic for the machinepulse telemetry service.
//!
//! Everything in this crate is synchronous and I/O-free so it can be tested
//! in isolation. The API crate fetches rows from the store, feeds them in,
//! and serializes the results out.

pub mod frequency;
pub mod summary;
pub mod types;
