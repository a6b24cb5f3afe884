use serde::{Deserialize, Serialize};

/// Payment-behaviour proxies derived from a bank statement.
///
/// `avg_days_to_pay` is a heuristic: a statement carries no invoice or due-date data, so the
/// value is a step function of bounce and overdraft counts, not a measured payment term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub avg_days_to_pay: u32,
    pub bounced_cheques_last_12m: u32,
    pub past_default_flag: bool,
    pub cashflow_ratio: f64,
    pub negative_days: u32,
    pub emi_months: u32,
    pub transactions_analyzed: usize,
}

/// Maps bounce and negative-balance counts to a proxy days-to-pay tier.
/// Tiers are checked from most lenient to least; the first match wins.
pub fn proxy_days_to_pay(bounce_count: u32, negative_days: u32) -> u32 {
    if bounce_count == 0 && negative_days == 0 {
        30
    } else if bounce_count <= 2 && negative_days <= 3 {
        45
    } else if bounce_count <= 5 || negative_days < 10 {
        60
    } else {
        90
    }
}

pub fn implies_past_default(bounce_count: u32, negative_days: u32) -> bool {
    bounce_count > 3 || negative_days > 10
}

/// Inflow over outflow at two decimals; `1.0` when no outflow was observed.
pub fn cashflow_ratio(total_credit: f64, total_debit: f64) -> f64 {
    if total_debit <= 0.0 {
        return 1.0;
    }
    ((total_credit / total_debit) * 100.0).round() / 100.0
}
