//! Contract checks for an HTTP service that renders HTML tables into PDFs.
//!
//! The [`harness::Harness`] sends a fixed, sequential set of requests (health
//! probe, one PDF generation, two malformed requests) and turns every outcome
//! into a [`testing::CheckResult`]. Nothing a single check runs into, be it a
//! refused connection or an undecodable body, escapes that check.

pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod http;
pub mod report;
pub mod sample;
pub mod testing;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::Harness;
pub use testing::{CheckResult, RunReport};
