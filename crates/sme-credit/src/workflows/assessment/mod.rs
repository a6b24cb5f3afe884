//! End-to-end credit assessment: optional statement analysis feeding the scoring engine.
//!
//! The statement analyzer and the scoring engine never talk to each other directly. This module
//! is the caller that merges a statement summary into the profile before scoring.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::assessment_router;
pub use service::{
    AssessmentOutcome, AssessmentRequest, CreditAssessmentService, PaymentOverrides,
    StatementSource,
};
