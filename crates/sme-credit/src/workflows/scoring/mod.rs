//! Rule-based credit scoring over a typed small-business profile.

mod config;
pub mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{ScoringConfig, ScoringConfigError};
pub use domain::{
    CreditRating, IndustryRisk, ParseCategoryError, PaymentBehaviour, ScoringProfile, TriState,
    TurnoverTrend,
};
pub use policy::{Decision, RiskBand};

use policy::{band_for, decide_outcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying the rule tables and band cutoffs to a profile.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, profile: &ScoringProfile) -> ScoringResult {
        let trail = rules::score_profile(profile);
        let category_scores = trail.category_scores();

        let raw_total = category_scores.sum() + trail.adjustment_total();
        let total_score = (raw_total.clamp(0.0, 100.0) * 10.0).round() / 10.0;
        let risk_band = band_for(total_score, &self.config);
        let decision = decide_outcome(profile, risk_band);

        debug!(
            total_score,
            risk_band = risk_band.label(),
            decision = decision.label(),
            reasons = trail.reasons.len(),
            "profile scored"
        );

        ScoringResult {
            total_score,
            risk_band,
            decision,
            reasons: trail.reasons,
            category_scores,
            components: trail.components,
            adjustments: trail.adjustments,
        }
    }
}

/// Rubric groups; each subtotal is clamped to its own maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    FinancialStrength,
    PaymentBehaviour,
    ExternalChecks,
    BusinessStability,
}

impl ScoreCategory {
    pub const fn max_points(self) -> f64 {
        match self {
            ScoreCategory::FinancialStrength => 40.0,
            ScoreCategory::PaymentBehaviour => 30.0,
            ScoreCategory::ExternalChecks => 15.0,
            ScoreCategory::BusinessStability => 15.0,
        }
    }
}

/// Individual rules contributing to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    NetProfitMargin,
    CurrentRatio,
    DebtToEquity,
    BankingLimitUtilisation,
    TurnoverTrend,
    DaysToPay,
    BouncedCheques,
    DefaultHistory,
    GstFiling,
    Litigation,
    CreditRating,
    YearsInBusiness,
    IndustryRisk,
    CustomerConcentration,
    ManagementRisk,
}

impl ScoringFactor {
    pub const fn category(self) -> ScoreCategory {
        match self {
            ScoringFactor::NetProfitMargin
            | ScoringFactor::CurrentRatio
            | ScoringFactor::DebtToEquity
            | ScoringFactor::BankingLimitUtilisation
            | ScoringFactor::TurnoverTrend => ScoreCategory::FinancialStrength,
            ScoringFactor::DaysToPay
            | ScoringFactor::BouncedCheques
            | ScoringFactor::DefaultHistory => ScoreCategory::PaymentBehaviour,
            ScoringFactor::GstFiling | ScoringFactor::Litigation | ScoringFactor::CreditRating => {
                ScoreCategory::ExternalChecks
            }
            ScoringFactor::YearsInBusiness
            | ScoringFactor::IndustryRisk
            | ScoringFactor::CustomerConcentration
            | ScoringFactor::ManagementRisk => ScoreCategory::BusinessStability,
        }
    }
}

/// Points awarded by a single rule, kept for audit display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub category: ScoreCategory,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub financial_strength: f64,
    pub payment_behaviour: f64,
    pub external_checks: f64,
    pub business_stability: f64,
}

impl CategoryScores {
    pub fn sum(&self) -> f64 {
        self.financial_strength
            + self.payment_behaviour
            + self.external_checks
            + self.business_stability
    }
}

/// Score, band, decision and the ordered reasons behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub total_score: f64,
    pub risk_band: RiskBand,
    pub decision: Decision,
    pub reasons: Vec<String>,
    pub category_scores: CategoryScores,
    pub components: Vec<ScoreComponent>,
    /// Past-default and management penalties, applied to the total rather than a category.
    pub adjustments: Vec<ScoreComponent>,
}
