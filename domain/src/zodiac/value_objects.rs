//! Day/month value objects for sign classification

use crate::core::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted birth date layouts: ISO first, then the Brazilian form
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Problems with the date typed into the sign form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateInputError {
    #[error("Por favor, informe uma data de nascimento válida.")]
    Missing,

    #[error("Data de nascimento inválida: {0}")]
    Invalid(String),

    #[error("A data de nascimento não pode ser posterior a {0}.")]
    InFuture(NaiveDate),
}

/// A day of the year without year, e.g. `22/12`
///
/// Days are only checked against `1..=31`; whether the month has that many
/// days is left to whoever wrote the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayMonth {
    pub day: u32,
    pub month: u32,
}

impl DayMonth {
    pub fn new(day: u32, month: u32) -> Result<Self, DomainError> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(DomainError::InvalidDayMonth(format!("{}/{}", day, month)));
        }
        Ok(Self { day, month })
    }
}

impl std::str::FromStr for DayMonth {
    type Err = DomainError;

    /// Parse `DD/MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidDayMonth(s.to_string());

        let (day, month) = s.trim().split_once('/').ok_or_else(invalid)?;
        let day = day.trim().parse::<u32>().map_err(|_| invalid())?;
        let month = month.trim().parse::<u32>().map_err(|_| invalid())?;

        Self::new(day, month).map_err(|_| invalid())
    }
}

impl std::fmt::Display for DayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)
    }
}

/// The (day, month) of a submitted date; the year plays no part in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32) -> Self {
        Self { day, month }
    }

    /// Parse a birth date typed by the user
    ///
    /// Accepts `YYYY-MM-DD` and `DD/MM/YYYY`. Dates after `today` are
    /// rejected, mirroring the form's upper bound.
    pub fn parse_input(raw: &str, today: NaiveDate) -> Result<Self, DateInputError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DateInputError::Missing);
        }

        let date = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .ok_or_else(|| DateInputError::Invalid(raw.to_string()))?;

        if date > today {
            return Err(DateInputError::InFuture(today));
        }

        Ok(Self::from(date))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_day_month_parse() {
        let dm: DayMonth = "22/12".parse().unwrap();
        assert_eq!(dm, DayMonth { day: 22, month: 12 });

        let dm: DayMonth = " 1/3 ".parse().unwrap();
        assert_eq!(dm, DayMonth { day: 1, month: 3 });
    }

    #[test]
    fn test_day_month_rejects_garbage() {
        assert!("2212".parse::<DayMonth>().is_err());
        assert!("xx/12".parse::<DayMonth>().is_err());
        assert!("32/01".parse::<DayMonth>().is_err());
        assert!("10/13".parse::<DayMonth>().is_err());
        assert!("0/5".parse::<DayMonth>().is_err());
    }

    #[test]
    fn test_day_month_not_checked_against_month_length() {
        assert!("31/02".parse::<DayMonth>().is_ok());
    }

    #[test]
    fn test_day_month_display_zero_padded() {
        assert_eq!(DayMonth::new(1, 3).unwrap().to_string(), "01/03");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = CalendarDate::parse_input("1990-12-25", today()).unwrap();
        assert_eq!(date, CalendarDate::new(25, 12));
    }

    #[test]
    fn test_parse_brazilian_date() {
        let date = CalendarDate::parse_input("19/01/2001", today()).unwrap();
        assert_eq!(date, CalendarDate::new(19, 1));
    }

    #[test]
    fn test_parse_missing_date() {
        assert_eq!(
            CalendarDate::parse_input("  ", today()),
            Err(DateInputError::Missing)
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(matches!(
            CalendarDate::parse_input("2001-02-30", today()),
            Err(DateInputError::Invalid(_))
        ));
        assert!(matches!(
            CalendarDate::parse_input("ontem", today()),
            Err(DateInputError::Invalid(_))
        ));
    }

    #[test]
    fn test_today_is_accepted_tomorrow_is_not() {
        assert!(CalendarDate::parse_input("2025-06-15", today()).is_ok());
        assert_eq!(
            CalendarDate::parse_input("2025-06-16", today()),
            Err(DateInputError::InFuture(today()))
        );
    }
}
