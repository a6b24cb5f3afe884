use crate::infra::load_profile;
use clap::Args;
use sme_credit::config::AppConfig;
use sme_credit::error::AppError;
use sme_credit::workflows::assessment::{
    AssessmentOutcome, AssessmentRequest, CreditAssessmentService, PaymentOverrides,
    StatementSource,
};
use sme_credit::workflows::scoring::ScoringResult;
use sme_credit::workflows::statement::{StatementAnalyzer, StatementSummary};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct StatementAnalyzeArgs {
    /// Bank statement CSV with date, description, debit, credit and balance columns
    #[arg(long)]
    pub(crate) statement: PathBuf,
    /// Print the summary as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Borrower profile stored as JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Optional statement CSV used to pre-populate payment behaviour
    #[arg(long)]
    pub(crate) statement: Option<PathBuf>,
    /// Override the average days to pay after statement analysis
    #[arg(long)]
    pub(crate) avg_days_to_pay: Option<u32>,
    /// Override the bounced cheque count after statement analysis
    #[arg(long)]
    pub(crate) bounced_cheques: Option<u32>,
    /// Override the past default flag after statement analysis
    #[arg(long)]
    pub(crate) past_default: Option<bool>,
    /// Print the full assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_statement_analysis(args: StatementAnalyzeArgs) -> Result<(), AppError> {
    let summary = StatementAnalyzer::new().analyze_path(&args.statement)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Statement analysis: {}", args.statement.display());
        render_statement_summary(&summary);
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        statement,
        avg_days_to_pay,
        bounced_cheques,
        past_default,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = CreditAssessmentService::new(config.scoring);

    let profile = load_profile(&profile)?;
    let statement = statement.and_then(|path| read_statement(&path));

    let outcome = service.assess(AssessmentRequest {
        profile,
        statement,
        overrides: PaymentOverrides {
            avg_days_to_pay,
            bounced_cheques_last_12m: bounced_cheques,
            past_default_flag: past_default,
        },
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_assessment(&outcome);
    }
    Ok(())
}

/// An unreadable statement file never blocks scoring; the manual payment inputs are kept.
fn read_statement(path: &Path) -> Option<StatementSource> {
    match std::fs::read_to_string(path) {
        Ok(csv) => Some(StatementSource::Csv(csv)),
        Err(err) => {
            println!(
                "Statement {} could not be read ({err}); manual payment inputs kept",
                path.display()
            );
            None
        }
    }
}

pub(crate) fn render_assessment(outcome: &AssessmentOutcome) {
    if let Some(summary) = &outcome.statement {
        println!("Statement-derived payment behaviour");
        render_statement_summary(summary);
    }
    if let Some(error) = &outcome.statement_error {
        println!("Statement could not be analyzed ({error}); manual payment inputs kept");
    }
    render_scoring_result(&outcome.result);
}

pub(crate) fn render_statement_summary(summary: &StatementSummary) {
    println!("- Transactions analyzed: {}", summary.transactions_analyzed);
    println!(
        "- Bounced / returned instruments: {}",
        summary.bounced_cheques_last_12m
    );
    println!("- Negative balance rows: {}", summary.negative_days);
    println!("- Months with EMI debits: {}", summary.emi_months);
    println!("- Cashflow ratio (inflow / outflow): {:.2}", summary.cashflow_ratio);
    println!("- Proxy average days to pay: {}", summary.avg_days_to_pay);
    println!(
        "- Past default indicated: {}",
        if summary.past_default_flag { "yes" } else { "no" }
    );
}

pub(crate) fn render_scoring_result(result: &ScoringResult) {
    println!(
        "Score {:.1}/100 | risk {} | decision {}",
        result.total_score,
        result.risk_band.label(),
        result.decision.label()
    );
    println!("Recommendation: {}", result.decision.summary());

    let categories = &result.category_scores;
    println!("Category breakdown:");
    println!("  - Financial strength: {:.1}/40", categories.financial_strength);
    println!("  - Payment behaviour: {:.1}/30", categories.payment_behaviour);
    println!("  - External checks: {:.1}/15", categories.external_checks);
    println!("  - Business stability: {:.1}/15", categories.business_stability);

    for adjustment in &result.adjustments {
        println!("  - Penalty ({:?}): {:.1}", adjustment.factor, adjustment.points);
    }

    if result.reasons.is_empty() {
        println!("No major risk flags raised.");
    } else {
        println!("Key risk factors:");
        for reason in &result.reasons {
            println!("  - {reason}");
        }
    }
}
