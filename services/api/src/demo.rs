use crate::report::{render_assessment, render_statement_summary};
use clap::Args;
use sme_credit::config::AppConfig;
use sme_credit::error::AppError;
use sme_credit::workflows::assessment::{
    AssessmentRequest, CreditAssessmentService, PaymentOverrides, StatementSource,
};
use sme_credit::workflows::scoring::{
    CreditRating, IndustryRisk, ScoringProfile, TriState, TurnoverTrend,
};
use std::path::PathBuf;

const SAMPLE_STATEMENT: &str = "Date,Description,Debit,Credit,Balance
01/04/2024,Opening balance,,,\"85,000.00\"
03/04/2024,NEFT FROM ANAND TRADERS,,\"1,20,000.00\",\"2,05,000.00\"
05/04/2024,TERM LOAN EMI APR,\"42,500.00\",,\"1,62,500.00\"
11/04/2024,CHQ RET 004512 FUNDS INSUFFICIENT,,,\"1,62,500.00\"
18/04/2024,GST PAYMENT,\"38,000.00\",,\"1,24,500.00\"
28/04/2024,SALARY APR,\"1,40,000.00\",,\"-15,500.00\"
02/05/2024,RTGS FROM KRISHNA EXPORTS,,\"2,10,000.00\",\"1,94,500.00\"
05/05/2024,TERM LOAN EMI MAY,\"42,500.00\",,\"1,52,000.00\"
21/05/2024,NACH RETURN CHARGES,590.00,,\"1,51,410.00\"
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Statement CSV to use for the borderline borrower instead of the bundled sample
    #[arg(long)]
    pub(crate) statement: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = CreditAssessmentService::new(config.scoring);

    let statement_csv = match args.statement {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_STATEMENT.to_string(),
    };

    println!("SME credit evaluation demo");
    println!(
        "Risk bands: LOW >= {:.0}, MEDIUM >= {:.0}, HIGH below",
        config.scoring.low_risk_min_score, config.scoring.medium_risk_min_score
    );

    let source = StatementSource::Csv(statement_csv);
    println!("\n[1] Statement analysis only");
    match service.analyze_statement(&source) {
        Ok(summary) => render_statement_summary(&summary),
        Err(err) => println!("Statement could not be analyzed: {err}"),
    }

    let borrowers = [
        ("Established manufacturer, manual inputs", established_manufacturer(), None),
        ("Growing distributor, statement-backed", growing_distributor(), Some(source)),
        ("Stressed contractor, manual inputs", stressed_contractor(), None),
    ];

    for (index, (title, profile, statement)) in borrowers.into_iter().enumerate() {
        println!("\n[{}] {title}", index + 2);
        let outcome = service.assess(AssessmentRequest {
            profile,
            statement,
            overrides: PaymentOverrides::default(),
        });
        render_assessment(&outcome);
    }

    Ok(())
}

fn established_manufacturer() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 14.0,
        current_ratio: 1.8,
        debt_to_equity: 0.7,
        banking_limit_utilisation: 62.0,
        turnover_trend: TurnoverTrend::Improving,
        avg_days_to_pay: 28,
        bounced_cheques_last_12m: 0,
        past_default_flag: false,
        gst_filing_timely: TriState::Yes,
        active_litigation: TriState::No,
        credit_rating: Some(CreditRating::Aa),
        years_in_business: 16.0,
        industry_risk: IndustryRisk::Low,
        top_5_customer_share: 35.0,
        management_risk_flag: false,
    }
}

fn growing_distributor() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 6.5,
        current_ratio: 1.3,
        debt_to_equity: 1.6,
        banking_limit_utilisation: 78.0,
        turnover_trend: TurnoverTrend::Improving,
        avg_days_to_pay: 30,
        bounced_cheques_last_12m: 0,
        past_default_flag: false,
        gst_filing_timely: TriState::Yes,
        active_litigation: TriState::Unknown,
        credit_rating: None,
        years_in_business: 4.0,
        industry_risk: IndustryRisk::Medium,
        top_5_customer_share: 55.0,
        management_risk_flag: false,
    }
}

fn stressed_contractor() -> ScoringProfile {
    ScoringProfile {
        net_profit_margin: 1.2,
        current_ratio: 0.8,
        debt_to_equity: 3.6,
        banking_limit_utilisation: 96.0,
        turnover_trend: TurnoverTrend::Declining,
        avg_days_to_pay: 95,
        bounced_cheques_last_12m: 7,
        past_default_flag: true,
        gst_filing_timely: TriState::No,
        active_litigation: TriState::Yes,
        credit_rating: Some(CreditRating::B),
        years_in_business: 1.5,
        industry_risk: IndustryRisk::High,
        top_5_customer_share: 88.0,
        management_risk_flag: true,
    }
}
