use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::{assessment_router, CreditAssessmentService};
use crate::workflows::scoring::domain::{
    CreditRating, IndustryRisk, ScoringProfile, TriState, TurnoverTrend,
};
use crate::workflows::scoring::ScoringConfig;

/// Strong fundamentals with clean manually entered payment behaviour.
pub(super) fn manual_profile() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 12.0,
        current_ratio: 1.6,
        debt_to_equity: 0.9,
        banking_limit_utilisation: 55.0,
        turnover_trend: TurnoverTrend::Stable,
        avg_days_to_pay: 30,
        bounced_cheques_last_12m: 0,
        past_default_flag: false,
        gst_filing_timely: TriState::Yes,
        active_litigation: TriState::No,
        credit_rating: Some(CreditRating::A),
        years_in_business: 8.0,
        industry_risk: IndustryRisk::Medium,
        top_5_customer_share: 45.0,
        management_risk_flag: false,
    }
}

/// Four returned cheques, two EMI months, no overdraft.
pub(super) fn bouncing_statement_csv() -> String {
    "Date,Description,Debit,Credit,Balance\n\
01/04/2024,NEFT FROM DISTRIBUTOR,,\"40,000.00\",\"40,000.00\"\n\
03/04/2024,CHQ RET 000114,,,\"40,000.00\"\n\
05/04/2024,TERM LOAN EMI,\"10,000.00\",,\"30,000.00\"\n\
09/04/2024,chq ret 000121,,,\"30,000.00\"\n\
05/05/2024,TERM LOAN EMI,\"10,000.00\",,\"20,000.00\"\n\
12/05/2024,NACH RETURN CHARGES,500.00,,\"19,500.00\"\n\
20/05/2024,Cheque bounce - insufficient funds,,,\"19,500.00\"\n"
        .to_string()
}

pub(super) fn build_service() -> Arc<CreditAssessmentService> {
    Arc::new(CreditAssessmentService::new(ScoringConfig::default()))
}

pub(super) fn build_router() -> axum::Router {
    assessment_router(build_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}
