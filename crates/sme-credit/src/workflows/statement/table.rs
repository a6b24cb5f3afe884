use super::normalizer::{normalize_description, normalize_header, parse_amount, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Columns every statement must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "description", "debit", "credit", "balance"];

/// Raised when a statement lacks one of the required columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("statement is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// One parsed statement row. Unreadable cells have already been coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub balance: Option<f64>,
}

impl Transaction {
    /// Build a row from raw cell text, applying the tolerant coercion rules.
    pub fn from_cells(
        date: &str,
        description: &str,
        debit: &str,
        credit: &str,
        balance: &str,
    ) -> Self {
        Self {
            date: parse_date(date),
            description: normalize_description(description),
            debit: parse_amount(debit).unwrap_or(0.0),
            credit: parse_amount(credit).unwrap_or(0.0),
            balance: parse_amount(balance),
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    date: usize,
    description: usize,
    debit: usize,
    credit: usize,
    balance: usize,
}

impl ColumnLayout {
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| normalize_header(header.as_ref()))
            .collect();

        let position = |column: &'static str| {
            normalized
                .iter()
                .position(|header| header == column)
                .ok_or(SchemaError::MissingColumn { column })
        };

        Ok(Self {
            date: position("date")?,
            description: position("description")?,
            debit: position("debit")?,
            credit: position("credit")?,
            balance: position("balance")?,
        })
    }

    fn parse_row<S: AsRef<str>>(&self, row: &[S]) -> Transaction {
        let cell = |index: usize| row.get(index).map(|value| value.as_ref()).unwrap_or("");
        Transaction::from_cells(
            cell(self.date),
            cell(self.description),
            cell(self.debit),
            cell(self.credit),
            cell(self.balance),
        )
    }
}

/// Tabular statement data as handed over by a collaborator (CSV export, spreadsheet, JSON grid).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StatementTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a CSV export. Cells are trimmed and ragged rows are tolerated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validate the header row, then coerce every data row into a [`Transaction`].
    pub fn transactions(&self) -> Result<Vec<Transaction>, SchemaError> {
        let layout = ColumnLayout::resolve(self.headers.as_slice())?;
        Ok(self.rows.iter().map(|row| layout.parse_row(row.as_slice())).collect())
    }
}
