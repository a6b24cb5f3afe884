use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::assessment::router::analyze_handler;
use crate::workflows::assessment::StatementSource;

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
        .expect("request")
}

#[tokio::test]
async fn analyze_route_returns_summary() {
    let router = build_router();

    let response = router
        .oneshot(post_json(
            "/api/v1/statements/analyze",
            &json!({ "csv": bouncing_statement_csv() }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["bounced_cheques_last_12m"], json!(4));
    assert_eq!(payload["avg_days_to_pay"], json!(60));
    assert_eq!(payload["past_default_flag"], json!(true));
}

#[tokio::test]
async fn analyze_handler_returns_unprocessable_for_missing_columns() {
    let response = analyze_handler(
        State(build_service()),
        axum::Json(StatementSource::Csv(
            "date,description,debit,credit\n2024-01-01,x,1,2\n".to_string(),
        )),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("balance"));
}

#[tokio::test]
async fn analyze_route_accepts_tables() {
    let router = build_router();
    let payload = json!({
        "table": {
            "headers": ["Date", "Description", "Debit", "Credit", "Balance"],
            "rows": [
                ["2024-04-01", "OPENING", "", "1000", "1000"],
                ["2024-04-02", "ATM", "1500", "", "-500"]
            ]
        }
    });

    let response = router
        .oneshot(post_json("/api/v1/statements/analyze", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["negative_days"], json!(1));
    assert_eq!(payload["avg_days_to_pay"], json!(45));
    assert_eq!(payload["cashflow_ratio"], json!(0.67));
}

#[tokio::test]
async fn evaluate_route_scores_profile() {
    let router = build_router();
    let profile = serde_json::to_value(manual_profile()).expect("serialize profile");

    let response = router
        .oneshot(post_json("/api/v1/credit/evaluate", &profile))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_band"], json!("LOW"));
    assert_eq!(payload["decision"], json!("APPROVE"));
    assert_eq!(payload["reasons"], json!([]));
    assert_eq!(payload["category_scores"]["payment_behaviour"], json!(30.0));
}

#[tokio::test]
async fn evaluate_route_rejects_unknown_categories() {
    let router = build_router();
    let mut profile = serde_json::to_value(manual_profile()).expect("serialize profile");
    profile["industry_risk"] = json!("volatile");

    let response = router
        .oneshot(post_json("/api/v1/credit/evaluate", &profile))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn assess_route_merges_statement_and_overrides() {
    let router = build_router();
    let request = json!({
        "profile": serde_json::to_value(manual_profile()).expect("serialize profile"),
        "statement": { "csv": bouncing_statement_csv() },
        "overrides": { "avg_days_to_pay": 30 }
    });

    let response = router
        .oneshot(post_json("/api/v1/credit/assess", &request))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["statement"]["avg_days_to_pay"], json!(60));
    assert_eq!(payload["profile"]["avg_days_to_pay"], json!(30));
    assert_eq!(payload["profile"]["past_default_flag"], json!(true));
    assert_eq!(payload["result"]["decision"], json!("CONDITIONAL_APPROVAL"));
    assert!(payload.get("statement_error").is_none());
}
