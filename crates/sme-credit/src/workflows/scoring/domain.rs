use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a categorical input does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {field} value '{value}'")]
pub struct ParseCategoryError {
    pub field: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

fn category_key(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Direction of turnover over recent periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TurnoverTrend {
    Improving,
    Stable,
    Declining,
    NotSure,
}

impl FromStr for TurnoverTrend {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match category_key(value).as_str() {
            "improving" => Ok(Self::Improving),
            "stable" => Ok(Self::Stable),
            "declining" => Ok(Self::Declining),
            "not sure" | "unknown" => Ok(Self::NotSure),
            _ => Err(ParseCategoryError::new("turnover_trend", value)),
        }
    }
}

impl TryFrom<String> for TurnoverTrend {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Sector risk as assessed by the credit analyst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum IndustryRisk {
    Low,
    Medium,
    High,
    NotSure,
}

impl FromStr for IndustryRisk {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match category_key(value).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "not sure" | "unknown" => Ok(Self::NotSure),
            _ => Err(ParseCategoryError::new("industry_risk", value)),
        }
    }
}

impl TryFrom<String> for IndustryRisk {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Yes/no answer that may not have been checked. Serialized as `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }
}

impl FromStr for TriState {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match category_key(value).as_str() {
            "yes" | "true" | "y" => Ok(Self::Yes),
            "no" | "false" | "n" => Ok(Self::No),
            "unknown" | "not sure" | "" => Ok(Self::Unknown),
            _ => Err(ParseCategoryError::new("tri-state", value)),
        }
    }
}

/// External agency rating, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum CreditRating {
    Aaa,
    Aa,
    A,
    Bbb,
    Bb,
    B,
    C,
}

impl CreditRating {
    pub const fn label(self) -> &'static str {
        match self {
            CreditRating::Aaa => "AAA",
            CreditRating::Aa => "AA",
            CreditRating::A => "A",
            CreditRating::Bbb => "BBB",
            CreditRating::Bb => "BB",
            CreditRating::B => "B",
            CreditRating::C => "C",
        }
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CreditRating {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AAA" => Ok(Self::Aaa),
            "AA" => Ok(Self::Aa),
            "A" => Ok(Self::A),
            "BBB" => Ok(Self::Bbb),
            "BB" => Ok(Self::Bb),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(ParseCategoryError::new("credit_rating", value)),
        }
    }
}

impl TryFrom<String> for CreditRating {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The payment-behaviour group of a profile, which a statement analysis can pre-populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBehaviour {
    pub avg_days_to_pay: u32,
    pub bounced_cheques_last_12m: u32,
    pub past_default_flag: bool,
}

/// Everything the scoring engine looks at. Percentages are expressed as 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    // financial ratios
    pub net_profit_margin: f64,
    pub current_ratio: f64,
    pub debt_to_equity: f64,
    pub banking_limit_utilisation: f64,
    pub turnover_trend: TurnoverTrend,

    // payment behaviour
    pub avg_days_to_pay: u32,
    pub bounced_cheques_last_12m: u32,
    pub past_default_flag: bool,

    // external checks
    #[serde(default)]
    pub gst_filing_timely: TriState,
    #[serde(default)]
    pub active_litigation: TriState,
    #[serde(default)]
    pub credit_rating: Option<CreditRating>,

    // business stability
    pub years_in_business: f64,
    pub industry_risk: IndustryRisk,
    pub top_5_customer_share: f64,
    pub management_risk_flag: bool,
}

impl ScoringProfile {
    pub fn payment_behaviour(&self) -> PaymentBehaviour {
        PaymentBehaviour {
            avg_days_to_pay: self.avg_days_to_pay,
            bounced_cheques_last_12m: self.bounced_cheques_last_12m,
            past_default_flag: self.past_default_flag,
        }
    }

    /// Replace the payment-behaviour group, leaving every other field untouched.
    pub fn with_payment_behaviour(mut self, behaviour: PaymentBehaviour) -> Self {
        self.avg_days_to_pay = behaviour.avg_days_to_pay;
        self.bounced_cheques_last_12m = behaviour.bounced_cheques_last_12m;
        self.past_default_flag = behaviour.past_default_flag;
        self
    }
}
