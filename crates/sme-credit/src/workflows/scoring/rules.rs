use super::domain::{CreditRating, IndustryRisk, ScoringProfile, TriState, TurnoverTrend};
use super::{CategoryScores, ScoreCategory, ScoreComponent, ScoringFactor};

const DEFAULT_HISTORY_CLEAN: f64 = 10.0;
const DEFAULT_HISTORY_PENALTY: f64 = -15.0;
const MANAGEMENT_RISK_PENALTY: f64 = -5.0;

pub(crate) struct RuleTrail {
    pub components: Vec<ScoreComponent>,
    /// Charged against the total after the category clamp, so a weak category cannot absorb them.
    pub adjustments: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
}

impl RuleTrail {
    fn new() -> Self {
        Self {
            components: Vec::new(),
            adjustments: Vec::new(),
            reasons: Vec::new(),
        }
    }

    fn award(&mut self, factor: ScoringFactor, points: f64) {
        self.components.push(ScoreComponent {
            factor,
            category: factor.category(),
            points,
        });
    }

    fn penalize(&mut self, factor: ScoringFactor, points: f64) {
        self.adjustments.push(ScoreComponent {
            factor,
            category: factor.category(),
            points,
        });
    }

    pub(crate) fn adjustment_total(&self) -> f64 {
        self.adjustments.iter().map(|adjustment| adjustment.points).sum()
    }

    fn flag(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub(crate) fn category_scores(&self) -> CategoryScores {
        let subtotal = |category: ScoreCategory| {
            let raw: f64 = self
                .components
                .iter()
                .filter(|component| component.category == category)
                .map(|component| component.points)
                .sum();
            raw.clamp(0.0, category.max_points())
        };

        CategoryScores {
            financial_strength: subtotal(ScoreCategory::FinancialStrength),
            payment_behaviour: subtotal(ScoreCategory::PaymentBehaviour),
            external_checks: subtotal(ScoreCategory::ExternalChecks),
            business_stability: subtotal(ScoreCategory::BusinessStability),
        }
    }
}

/// Apply every rule in category order. Reasons are appended in the same order.
pub(crate) fn score_profile(profile: &ScoringProfile) -> RuleTrail {
    let mut trail = RuleTrail::new();
    financial_strength(profile, &mut trail);
    payment_behaviour(profile, &mut trail);
    external_checks(profile, &mut trail);
    business_stability(profile, &mut trail);
    trail
}

fn financial_strength(profile: &ScoringProfile, trail: &mut RuleTrail) {
    let npm = profile.net_profit_margin;
    let points = if npm > 10.0 {
        10.0
    } else if npm > 5.0 {
        8.0
    } else if npm > 2.0 {
        5.0
    } else if npm > 0.0 {
        2.0
    } else {
        trail.flag(format!(
            "Net profit margin is very low or negative ({npm:.1}%)"
        ));
        0.0
    };
    trail.award(ScoringFactor::NetProfitMargin, points);

    let ratio = profile.current_ratio;
    let points = if ratio >= 1.5 {
        8.0
    } else if ratio >= 1.2 {
        6.0
    } else if ratio >= 1.0 {
        4.0
    } else {
        trail.flag(format!(
            "Current ratio below 1.0 indicates tight liquidity (current ratio {ratio:.2})"
        ));
        1.0
    };
    trail.award(ScoringFactor::CurrentRatio, points);

    let leverage = profile.debt_to_equity;
    let points = if leverage <= 1.0 {
        8.0
    } else if leverage <= 2.0 {
        6.0
    } else if leverage <= 3.0 {
        3.0
    } else {
        trail.flag(format!("Debt-to-equity is very high ({leverage:.2}x)"));
        0.0
    };
    trail.award(ScoringFactor::DebtToEquity, points);

    let utilisation = profile.banking_limit_utilisation;
    let points = if (40.0..=80.0).contains(&utilisation) {
        8.0
    } else if utilisation < 40.0 {
        trail.flag(format!(
            "Bank limit utilisation is low ({utilisation:.0}%); sanctioned facilities may be underused"
        ));
        6.0
    } else if utilisation <= 90.0 {
        5.0
    } else {
        trail.flag(format!(
            "Bank limit utilisation above 90% indicates working-capital stress ({utilisation:.0}%)"
        ));
        2.0
    };
    trail.award(ScoringFactor::BankingLimitUtilisation, points);

    let points = match profile.turnover_trend {
        TurnoverTrend::Improving => 6.0,
        TurnoverTrend::Stable => 4.0,
        TurnoverTrend::Declining => {
            trail.flag("Turnover trend is declining");
            2.0
        }
        TurnoverTrend::NotSure => 1.0,
    };
    trail.award(ScoringFactor::TurnoverTrend, points);
}

fn payment_behaviour(profile: &ScoringProfile, trail: &mut RuleTrail) {
    let days = profile.avg_days_to_pay;
    let points = match days {
        0..=30 => 10.0,
        31..=45 => 8.0,
        46..=60 => 5.0,
        61..=90 => {
            trail.flag(format!(
                "Average payment days are on the higher side ({days} days)"
            ));
            2.0
        }
        _ => {
            trail.flag(format!("Very high average payment days ({days} days)"));
            0.0
        }
    };
    trail.award(ScoringFactor::DaysToPay, points);

    let bounces = profile.bounced_cheques_last_12m;
    let points = match bounces {
        0 => 10.0,
        1..=2 => {
            trail.flag(format!(
                "Some cheque bounces in last 12 months ({bounces})"
            ));
            7.0
        }
        3..=5 => {
            trail.flag(format!(
                "Multiple cheque bounces in last 12 months ({bounces})"
            ));
            3.0
        }
        _ => {
            trail.flag(format!(
                "Frequent cheque bounces in last 12 months ({bounces})"
            ));
            0.0
        }
    };
    trail.award(ScoringFactor::BouncedCheques, points);

    if profile.past_default_flag {
        trail.flag("History of default / write-off reported");
        trail.award(ScoringFactor::DefaultHistory, 0.0);
        trail.penalize(ScoringFactor::DefaultHistory, DEFAULT_HISTORY_PENALTY);
    } else {
        trail.award(ScoringFactor::DefaultHistory, DEFAULT_HISTORY_CLEAN);
    }
}

fn external_checks(profile: &ScoringProfile, trail: &mut RuleTrail) {
    let points = match profile.gst_filing_timely {
        TriState::Yes => 5.0,
        TriState::No => {
            trail.flag("GST filing not timely");
            1.0
        }
        TriState::Unknown => 3.0,
    };
    trail.award(ScoringFactor::GstFiling, points);

    let points = match profile.active_litigation {
        TriState::No => 5.0,
        TriState::Yes => {
            trail.flag("Active litigation / legal disputes reported");
            1.0
        }
        TriState::Unknown => 3.0,
    };
    trail.award(ScoringFactor::Litigation, points);

    let points = match profile.credit_rating {
        Some(CreditRating::Aaa) => 5.0,
        Some(CreditRating::Aa) => 4.0,
        Some(CreditRating::A) => 3.0,
        Some(CreditRating::Bbb) => 2.0,
        Some(CreditRating::Bb) => 1.0,
        Some(rating @ (CreditRating::B | CreditRating::C)) => {
            trail.flag(format!("Weak external rating ({rating})"));
            0.0
        }
        None => 1.0,
    };
    trail.award(ScoringFactor::CreditRating, points);
}

fn business_stability(profile: &ScoringProfile, trail: &mut RuleTrail) {
    let years = profile.years_in_business;
    let points = if years >= 10.0 {
        6.0
    } else if years >= 5.0 {
        4.0
    } else if years >= 2.0 {
        2.0
    } else {
        trail.flag(format!("Limited operating history ({years:.1} years)"));
        0.0
    };
    trail.award(ScoringFactor::YearsInBusiness, points);

    let points = match profile.industry_risk {
        IndustryRisk::Low => 5.0,
        IndustryRisk::Medium => 3.0,
        IndustryRisk::High => {
            trail.flag("High-risk industry");
            1.0
        }
        IndustryRisk::NotSure => 2.0,
    };
    trail.award(ScoringFactor::IndustryRisk, points);

    let share = profile.top_5_customer_share;
    let points = if share <= 40.0 {
        4.0
    } else if share <= 60.0 {
        3.0
    } else if share <= 80.0 {
        trail.flag(format!(
            "Moderate customer concentration (top 5 customers = {share:.0}% of sales)"
        ));
        2.0
    } else {
        trail.flag(format!(
            "High customer concentration (top 5 customers = {share:.0}% of sales)"
        ));
        0.0
    };
    trail.award(ScoringFactor::CustomerConcentration, points);

    if profile.management_risk_flag {
        trail.flag("Concerns flagged on management integrity / governance");
        trail.penalize(ScoringFactor::ManagementRisk, MANAGEMENT_RISK_PENALTY);
    }
}
