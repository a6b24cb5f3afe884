use super::config::ScoringConfig;
use super::domain::ScoringProfile;
use serde::{Deserialize, Serialize};

/// Ordinal risk classification derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        }
    }
}

/// Lending decision returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approve,
    ConditionalApproval,
    Decline,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approve => "APPROVE",
            Decision::ConditionalApproval => "CONDITIONAL_APPROVAL",
            Decision::Decline => "DECLINE",
        }
    }

    pub fn summary(self) -> String {
        match self {
            Decision::Approve => "approve the facility".to_string(),
            Decision::ConditionalApproval => {
                "approve subject to conditions (collateral, covenants or reduced limit)".to_string()
            }
            Decision::Decline => "decline the facility".to_string(),
        }
    }
}

pub(crate) fn band_for(total_score: f64, config: &ScoringConfig) -> RiskBand {
    if total_score >= config.low_risk_min_score {
        RiskBand::Low
    } else if total_score >= config.medium_risk_min_score {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}

/// HIGH always declines; a default history or management concern caps the outcome at a
/// conditional approval; otherwise the band decides.
pub(crate) fn decide_outcome(profile: &ScoringProfile, band: RiskBand) -> Decision {
    if band == RiskBand::High {
        return Decision::Decline;
    }

    if profile.past_default_flag || profile.management_risk_flag {
        return Decision::ConditionalApproval;
    }

    match band {
        RiskBand::Low => Decision::Approve,
        RiskBand::Medium | RiskBand::High => Decision::ConditionalApproval,
    }
}
