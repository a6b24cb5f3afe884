use crate::workflows::scoring::domain::{
    CreditRating, IndustryRisk, ScoringProfile, TriState, TurnoverTrend,
};
use crate::workflows::scoring::{ScoringConfig, ScoringEngine};

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

/// A healthy manufacturer with favourable external checks.
pub(super) fn strong_profile() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 15.0,
        current_ratio: 1.5,
        debt_to_equity: 0.8,
        banking_limit_utilisation: 60.0,
        turnover_trend: TurnoverTrend::Improving,
        avg_days_to_pay: 30,
        bounced_cheques_last_12m: 0,
        past_default_flag: false,
        gst_filing_timely: TriState::Yes,
        active_litigation: TriState::No,
        credit_rating: Some(CreditRating::Aaa),
        years_in_business: 10.0,
        industry_risk: IndustryRisk::Low,
        top_5_customer_share: 20.0,
        management_risk_flag: false,
    }
}

/// A middling trader with unknown external checks.
pub(super) fn average_profile() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 4.0,
        current_ratio: 1.1,
        debt_to_equity: 1.8,
        banking_limit_utilisation: 85.0,
        turnover_trend: TurnoverTrend::Stable,
        avg_days_to_pay: 45,
        bounced_cheques_last_12m: 1,
        past_default_flag: false,
        gst_filing_timely: TriState::Unknown,
        active_litigation: TriState::Unknown,
        credit_rating: None,
        years_in_business: 6.0,
        industry_risk: IndustryRisk::Medium,
        top_5_customer_share: 50.0,
        management_risk_flag: false,
    }
}

/// Every factor in its worst tier.
pub(super) fn distressed_profile() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: -12.0,
        current_ratio: 0.6,
        debt_to_equity: 5.0,
        banking_limit_utilisation: 98.0,
        turnover_trend: TurnoverTrend::Declining,
        avg_days_to_pay: 120,
        bounced_cheques_last_12m: 9,
        past_default_flag: true,
        gst_filing_timely: TriState::No,
        active_litigation: TriState::Yes,
        credit_rating: Some(CreditRating::C),
        years_in_business: 1.0,
        industry_risk: IndustryRisk::High,
        top_5_customer_share: 92.0,
        management_risk_flag: true,
    }
}
