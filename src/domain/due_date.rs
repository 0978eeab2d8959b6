// src/domain/due_date.rs

use chrono::{Datelike, NaiveDate};
use std::fmt;

const SOURCE_FORMAT: &str = "%d/%m/%Y";

/// A boleto due date.
///
/// Parsed from the export's `dd/mm/yyyy` text and always written back in that
/// same zero-padded, fixed-width layout. The external identifier and the export
/// file name are derived from it, so the layout must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub fn parse(raw: &str) -> Result<Self, String> {
        NaiveDate::parse_from_str(raw.trim(), SOURCE_FORMAT)
            .map(DueDate)
            .map_err(|e| format!("invalid due date '{raw}' (expected dd/mm/yyyy): {e}"))
    }

    /// Moves the date to `day` of the same month and year.
    ///
    /// Days past the end of the month are clamped to its last day.
    pub fn with_day(self, day: u32) -> Self {
        let mut day = day.max(1);
        loop {
            if let Some(d) = self.0.with_day(day) {
                return DueDate(d);
            }
            day -= 1;
        }
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// `YYYYMM`, the prefix of every external identifier in a batch.
    pub fn year_month(&self) -> String {
        self.0.format("%Y%m").to_string()
    }

    /// `YYYYMMDD`, used in the export file name.
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SOURCE_FORMAT))
    }
}
