//! Composition of statement analysis and scoring.
//!
//! `statement` and `scoring` do not depend on each other. The conversion from a statement summary
//! to a profile's payment behaviour therefore lives here, in the only module that sees both.

use serde::{Deserialize, Serialize};
use std::io::Cursor;
use tracing::{debug, warn};

use crate::workflows::scoring::{
    PaymentBehaviour, ScoringConfig, ScoringEngine, ScoringProfile, ScoringResult,
};
use crate::workflows::statement::{
    StatementAnalyzer, StatementError, StatementSummary, StatementTable,
};

impl From<&StatementSummary> for PaymentBehaviour {
    fn from(summary: &StatementSummary) -> Self {
        PaymentBehaviour {
            avg_days_to_pay: summary.avg_days_to_pay,
            bounced_cheques_last_12m: summary.bounced_cheques_last_12m,
            past_default_flag: summary.past_default_flag,
        }
    }
}

impl StatementSummary {
    /// The three fields that pre-populate a profile's payment-behaviour group.
    pub fn payment_behaviour(&self) -> PaymentBehaviour {
        PaymentBehaviour::from(self)
    }
}

/// Caller edits applied on top of statement-derived payment behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOverrides {
    #[serde(default)]
    pub avg_days_to_pay: Option<u32>,
    #[serde(default)]
    pub bounced_cheques_last_12m: Option<u32>,
    #[serde(default)]
    pub past_default_flag: Option<bool>,
}

impl PaymentOverrides {
    pub fn is_empty(&self) -> bool {
        self.avg_days_to_pay.is_none()
            && self.bounced_cheques_last_12m.is_none()
            && self.past_default_flag.is_none()
    }

    pub fn apply(&self, profile: &mut ScoringProfile) {
        if let Some(days) = self.avg_days_to_pay {
            profile.avg_days_to_pay = days;
        }
        if let Some(bounces) = self.bounced_cheques_last_12m {
            profile.bounced_cheques_last_12m = bounces;
        }
        if let Some(flag) = self.past_default_flag {
            profile.past_default_flag = flag;
        }
    }
}

/// Statement upload accepted by the assessment flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementSource {
    Csv(String),
    Table(StatementTable),
}

/// Profile as entered manually, an optional statement and optional post-analysis edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub profile: ScoringProfile,
    #[serde(default)]
    pub statement: Option<StatementSource>,
    #[serde(default)]
    pub overrides: PaymentOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<StatementSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_error: Option<String>,
    pub profile: ScoringProfile,
    pub result: ScoringResult,
}

/// Composes the statement analyzer and the scoring engine. Holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct CreditAssessmentService {
    analyzer: StatementAnalyzer,
    engine: ScoringEngine,
}

impl CreditAssessmentService {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            analyzer: StatementAnalyzer::new(),
            engine: ScoringEngine::new(config),
        }
    }

    pub fn analyze_statement(
        &self,
        source: &StatementSource,
    ) -> Result<StatementSummary, StatementError> {
        match source {
            StatementSource::Csv(csv) => self.analyzer.analyze_reader(Cursor::new(csv.as_bytes())),
            StatementSource::Table(table) => Ok(self.analyzer.analyze_table(table)?),
        }
    }

    pub fn evaluate(&self, profile: &ScoringProfile) -> ScoringResult {
        self.engine.evaluate(profile)
    }

    /// Run the full flow. A statement that cannot be analyzed never blocks scoring: the
    /// manually entered payment behaviour is kept and the failure is reported alongside.
    pub fn assess(&self, request: AssessmentRequest) -> AssessmentOutcome {
        let AssessmentRequest {
            mut profile,
            statement,
            overrides,
        } = request;

        let mut statement_summary = None;
        let mut statement_error = None;

        if let Some(source) = statement {
            match self.analyze_statement(&source) {
                Ok(summary) => {
                    profile = profile.with_payment_behaviour(summary.payment_behaviour());
                    statement_summary = Some(summary);
                }
                Err(err) => {
                    warn!(error = %err, "statement analysis failed; using manual payment behaviour");
                    statement_error = Some(err.to_string());
                }
            }
        }

        if !overrides.is_empty() {
            debug!(?overrides, "applying payment behaviour overrides");
            overrides.apply(&mut profile);
        }

        let result = self.engine.evaluate(&profile);

        AssessmentOutcome {
            statement: statement_summary,
            statement_error,
            profile,
            result,
        }
    }
}
