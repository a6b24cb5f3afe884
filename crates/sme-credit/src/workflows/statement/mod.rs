//! Bank-statement analysis: derive payment-behaviour proxies from transaction rows.

pub mod keywords;
mod normalizer;
mod summary;
mod table;

pub use keywords::{is_bounce, is_emi};
pub use summary::{cashflow_ratio, implies_past_default, proxy_days_to_pay, StatementSummary};
pub use table::{ColumnLayout, SchemaError, StatementTable, Transaction, REQUIRED_COLUMNS};

use chrono::Datelike;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Failure to turn an uploaded statement into a summary.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("failed to read statement: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid statement CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Stateless analyzer; every call works only on the rows it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementAnalyzer;

impl StatementAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, transactions: &[Transaction]) -> StatementSummary {
        let mut bounce_count: u32 = 0;
        let mut negative_days: u32 = 0;
        let mut emi_months = BTreeSet::new();
        let mut total_credit = 0.0;
        let mut total_debit = 0.0;

        for transaction in transactions {
            if is_bounce(&transaction.description) {
                bounce_count += 1;
            }

            if transaction.balance.is_some_and(|balance| balance < 0.0) {
                negative_days += 1;
            }

            if let Some(date) = transaction.date {
                if is_emi(&transaction.description) {
                    emi_months.insert((date.year(), date.month()));
                }
            }

            if transaction.credit > 0.0 {
                total_credit += transaction.credit;
            }
            if transaction.debit > 0.0 {
                total_debit += transaction.debit;
            }
        }

        let summary = StatementSummary {
            avg_days_to_pay: proxy_days_to_pay(bounce_count, negative_days),
            bounced_cheques_last_12m: bounce_count,
            past_default_flag: implies_past_default(bounce_count, negative_days),
            cashflow_ratio: cashflow_ratio(total_credit, total_debit),
            negative_days,
            emi_months: emi_months.len() as u32,
            transactions_analyzed: transactions.len(),
        };

        debug!(
            rows = summary.transactions_analyzed,
            bounces = summary.bounced_cheques_last_12m,
            negative_days = summary.negative_days,
            cashflow_ratio = summary.cashflow_ratio,
            "statement analyzed"
        );

        summary
    }

    /// Check the column set, coerce the rows, then analyze them.
    pub fn analyze_table(&self, table: &StatementTable) -> Result<StatementSummary, SchemaError> {
        let transactions = table.transactions()?;
        Ok(self.analyze(&transactions))
    }

    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<StatementSummary, StatementError> {
        let table = StatementTable::from_csv_reader(reader)?;
        Ok(self.analyze_table(&table)?)
    }

    pub fn analyze_path<P: AsRef<Path>>(&self, path: P) -> Result<StatementSummary, StatementError> {
        let file = std::fs::File::open(path)?;
        self.analyze_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn row(description: &str, debit: f64, credit: f64, balance: Option<f64>) -> Transaction {
        Transaction {
            date: None,
            description: description.to_string(),
            debit,
            credit,
            balance,
        }
    }

    fn dated(date: &str, description: &str) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            ..row(description, 0.0, 0.0, Some(10.0))
        }
    }

    #[test]
    fn clean_salary_rows_produce_lenient_summary() {
        let rows = vec![row("SALARY", 0.0, 0.0, Some(100.0)); 5];

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.avg_days_to_pay, 30);
        assert_eq!(summary.bounced_cheques_last_12m, 0);
        assert!(!summary.past_default_flag);
        assert_eq!(summary.negative_days, 0);
        assert_eq!(summary.cashflow_ratio, 1.0);
        assert_eq!(summary.emi_months, 0);
        assert_eq!(summary.transactions_analyzed, 5);
    }

    #[test]
    fn four_returned_cheques_flag_default_at_sixty_days() {
        let mut rows = vec![row("NEFT RECEIPT", 0.0, 1000.0, Some(5000.0)); 3];
        rows.extend(vec![row("CHQ RET", 0.0, 0.0, Some(4000.0)); 4]);

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.bounced_cheques_last_12m, 4);
        assert!(summary.past_default_flag);
        assert_eq!(summary.avg_days_to_pay, 60);
    }

    #[test]
    fn heavy_bounces_and_overdrafts_map_to_ninety_days() {
        let mut rows = vec![row("NACH RETURN", 0.0, 0.0, Some(-1.0)); 6];
        rows.extend(vec![row("ATM", 10.0, 0.0, Some(-50.0)); 4]);

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.bounced_cheques_last_12m, 6);
        assert_eq!(summary.negative_days, 10);
        assert_eq!(summary.avg_days_to_pay, 90);
        assert!(summary.past_default_flag);
    }

    #[test]
    fn unparseable_balances_never_count_as_negative() {
        let rows = vec![
            row("A", 0.0, 0.0, None),
            row("B", 0.0, 0.0, Some(-0.01)),
            row("C", 0.0, 0.0, Some(0.0)),
            row("D", 0.0, 0.0, None),
        ];

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.negative_days, 1);
        assert_eq!(summary.avg_days_to_pay, 45);
    }

    #[test]
    fn bounce_count_grows_with_rows_and_ignores_case() {
        let analyzer = StatementAnalyzer::new();
        let mut rows = vec![row("opening", 0.0, 0.0, Some(1.0))];
        let mut previous = analyzer.analyze(&rows).bounced_cheques_last_12m;

        for description in ["chq ret", "Cheque Bounce", "ECS REJECT", "ret chq"] {
            rows.push(row(description, 0.0, 0.0, Some(1.0)));
            let current = analyzer.analyze(&rows).bounced_cheques_last_12m;
            assert_eq!(current, previous + 1);
            previous = current;
        }

        let upper: Vec<_> = rows
            .iter()
            .map(|transaction| row(&transaction.description.to_uppercase(), 0.0, 0.0, Some(1.0)))
            .collect();
        assert_eq!(analyzer.analyze(&upper).bounced_cheques_last_12m, previous);
    }

    #[test]
    fn cashflow_ratio_uses_positive_amounts_only() {
        let rows = vec![
            row("IN", 0.0, 1500.0, Some(1.0)),
            row("OUT", 1000.0, 0.0, Some(1.0)),
            row("REVERSAL", -400.0, -200.0, Some(1.0)),
        ];

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.cashflow_ratio, 1.5);
    }

    #[test]
    fn zero_outflow_yields_unit_ratio_regardless_of_inflow() {
        let rows = vec![row("IN", 0.0, 99_999.0, Some(1.0))];
        assert_eq!(StatementAnalyzer::new().analyze(&rows).cashflow_ratio, 1.0);
    }

    #[test]
    fn emi_months_count_distinct_calendar_months() {
        let rows = vec![
            dated("2024-01-05", "LOAN EMI"),
            dated("2024-01-25", "LOAN EMI"),
            dated("2024-02-05", "LOAN EMI"),
            dated("2025-01-05", "LOAN EMI"),
            dated("2024-03-05", "RENT"),
            row("UNDATED EMI", 0.0, 0.0, Some(1.0)),
        ];

        let summary = StatementAnalyzer::new().analyze(&rows);

        assert_eq!(summary.emi_months, 3);
    }

    #[test]
    fn empty_statement_is_clean() {
        let summary = StatementAnalyzer::new().analyze(&[]);
        assert_eq!(summary.avg_days_to_pay, 30);
        assert_eq!(summary.cashflow_ratio, 1.0);
        assert_eq!(summary.transactions_analyzed, 0);
    }

    #[test]
    fn analyze_reader_runs_end_to_end() {
        let csv = "Date,Description,Debit,Credit,Balance\n\
01/04/2024,NEFT from buyer,,\"25,000.00\",\"25,000.00\"\n\
05/04/2024,HDFC LOAN EMI,\"5,000.00\",,\"20,000.00\"\n\
06/04/2024,Chq Ret 1182,,,\"20,000.00\"\n\
05/05/2024,HDFC LOAN EMI,\"5,000.00\",,\"-1,000.00\"\n";

        let summary = StatementAnalyzer::new()
            .analyze_reader(Cursor::new(csv))
            .expect("analysis succeeds");

        assert_eq!(summary.bounced_cheques_last_12m, 1);
        assert_eq!(summary.negative_days, 1);
        assert_eq!(summary.emi_months, 2);
        assert_eq!(summary.cashflow_ratio, 2.5);
        assert_eq!(summary.avg_days_to_pay, 45);
        assert!(!summary.past_default_flag);
    }

    #[test]
    fn analyze_reader_reports_missing_columns() {
        let csv = "Date,Narration,Debit,Credit,Balance\n01/04/2024,x,1,2,3\n";

        let error = StatementAnalyzer::new()
            .analyze_reader(Cursor::new(csv))
            .expect_err("schema error");

        match error {
            StatementError::Schema(SchemaError::MissingColumn { column }) => {
                assert_eq!(column, "description")
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn analyze_path_propagates_io_errors() {
        let error = StatementAnalyzer::new()
            .analyze_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            StatementError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
