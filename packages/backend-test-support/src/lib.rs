//! Shared test support for the mafia backend.
//!
//! Holds the one-time test logging bootstrap and helpers for asserting the
//! problem-details error contract without depending on backend types.

pub mod logging;
pub mod problem_details;
