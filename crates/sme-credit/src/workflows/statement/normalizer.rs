use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const INVISIBLE: [char; 3] = ['\u{feff}', '\u{200b}', '\u{00a0}'];

// Day-first variants come after ISO; two-digit years are tried before four-digit ones so that
// `05-03-24` is never read as the year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%y",
    "%d/%m/%y",
    "%d-%b-%y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const CURRENCY_PREFIXES: &[&str] = &["INR", "RS.", "RS", "\u{20b9}"];

fn strip_invisible(value: &str) -> String {
    value.replace(INVISIBLE, " ")
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn normalize_header(value: &str) -> String {
    collapse_whitespace(&strip_invisible(value)).to_lowercase()
}

pub(crate) fn normalize_description(value: &str) -> String {
    collapse_whitespace(&strip_invisible(value)).to_uppercase()
}

fn plausible(date: NaiveDate) -> bool {
    (1900..=2100).contains(&date.year())
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date()).filter(|date| plausible(*date));
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            if plausible(dt.date()) {
                return Some(dt.date());
            }
        }
    }

    DATE_FORMATS
        .iter()
        .filter_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .find(|date| plausible(*date))
}

/// Parse a bank-export amount cell. `None` means the cell could not be read as a number.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    let upper = strip_invisible(value).trim().to_uppercase();
    if upper.is_empty() {
        return None;
    }

    let mut negative = false;
    let mut body = upper.as_str();

    if let Some(rest) = body.strip_suffix("DR") {
        negative = true;
        body = rest.trim_end();
    } else if let Some(rest) = body.strip_suffix("CR") {
        body = rest.trim_end();
    }

    if let Some(inner) = body.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        negative = true;
        body = inner.trim();
    }

    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest.trim_start();
    }

    for prefix in CURRENCY_PREFIXES {
        if let Some(rest) = body.strip_prefix(prefix) {
            body = rest.trim_start();
            break;
        }
    }

    let cleaned: String = body
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if !cleaned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let parsed = cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())?;
    Some(if negative { -parsed.abs() } else { parsed })
}
