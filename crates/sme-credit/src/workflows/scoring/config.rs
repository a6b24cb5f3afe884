use serde::{Deserialize, Serialize};

/// Risk-band cutoffs applied to the clamped total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub low_risk_min_score: f64,
    pub medium_risk_min_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            low_risk_min_score: 75.0,
            medium_risk_min_score: 50.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for cutoff in [self.low_risk_min_score, self.medium_risk_min_score] {
            if !(0.0..=100.0).contains(&cutoff) {
                return Err(ScoringConfigError::OutOfRange(cutoff));
            }
        }

        if self.medium_risk_min_score > self.low_risk_min_score {
            return Err(ScoringConfigError::Inverted {
                low: self.low_risk_min_score,
                medium: self.medium_risk_min_score,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("cutoff {0} is outside 0-100")]
    OutOfRange(f64),
    #[error("medium-risk cutoff {medium} is above low-risk cutoff {low}")]
    Inverted { low: f64, medium: f64 },
}
