//! Small-business credit evaluation: bank-statement behaviour analysis and rule-based scoring.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
