use chrono::NaiveDate;

use crate::domain::entities::record::ReconciliationResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_stored: u64,
    pub total_in_file: u64,
    pub missing_count: usize,
    pub quantity_total: u64,
    pub day_count: i64,
}

pub fn summarize(
    result: &ReconciliationResult,
    date_start: Option<&str>,
    date_end: Option<&str>,
) -> Summary {
    Summary {
        total_stored: result.total_stored,
        total_in_file: result.total_in_file,
        missing_count: result.missing.len(),
        quantity_total: result.quantity_total(),
        day_count: day_count(date_start, date_end),
    }
}

/// Inclusive day count over the absolute distance; 0 when a date is absent or unparseable.
pub fn day_count(date_start: Option<&str>, date_end: Option<&str>) -> i64 {
    let (Some(start), Some(end)) = (parse_date(date_start), parse_date(date_end)) else {
        return 0;
    };
    (end - start).num_days().abs() + 1
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// `2024-03-05` becomes `05/03/2024`; anything else is returned as is.
pub fn format_br_date(value: &str) -> String {
    parse_date(Some(value))
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
