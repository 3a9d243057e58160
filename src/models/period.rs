//! Calculation period labels.
//!
//! Builds the human-readable period stored in
//! [`ContractTerms::calculation_period`](super::ContractTerms) from a pair of
//! dates, as an Italian range such as `1° ottobre 2024 - 1° settembre 2025`.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// An inclusive date range whose `Display` is the Italian period label.
///
/// # Example
///
/// ```
/// use contract_proposal::models::CalculationPeriod;
/// use chrono::NaiveDate;
///
/// let period = CalculationPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
/// );
/// assert_eq!(period.to_string(), "1° ottobre 2024 - 1° settembre 2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationPeriod {
    /// The first day of the period.
    pub start: NaiveDate,
    /// The last day of the period.
    pub end: NaiveDate,
}

impl CalculationPeriod {
    /// Creates a new calculation period.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for CalculationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_italian_date(f, self.start)?;
        f.write_str(" - ")?;
        write_italian_date(f, self.end)
    }
}

/// Writes a date in long Italian form. The first of the month takes the
/// ordinal marker (`1°`), every other day is a plain number.
fn write_italian_date(f: &mut fmt::Formatter<'_>, date: NaiveDate) -> fmt::Result {
    let month = ITALIAN_MONTHS[date.month0() as usize];
    if date.day() == 1 {
        write!(f, "1° {} {}", month, date.year())
    } else {
        write!(f, "{} {} {}", date.day(), month, date.year())
    }
}
