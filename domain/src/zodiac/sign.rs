//! Sign records and the read-only catalog handle

use super::matcher::match_sign;
use super::value_objects::{CalendarDate, DayMonth};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named day/month range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRecord {
    pub name: String,
    /// Display glyph, e.g. `♑`
    pub symbol: String,
    pub range_start: DayMonth,
    pub range_end: DayMonth,
    pub description: String,
}

impl SignRecord {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        range_start: DayMonth,
        range_end: DayMonth,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            range_start,
            range_end,
            description: description.into(),
        }
    }

    /// `start - end`, e.g. `22/12 - 19/01`
    pub fn period(&self) -> String {
        format!("{} - {}", self.range_start, self.range_end)
    }

    /// The range crosses a month boundary
    pub fn spans_months(&self) -> bool {
        self.range_start.month != self.range_end.month
    }
}

/// Loaded sign records, in catalog order
///
/// Cloning shares the same records; nothing can modify them after load.
#[derive(Debug, Clone)]
pub struct SignCatalog {
    records: Arc<[SignRecord]>,
}

impl SignCatalog {
    pub fn new(records: Vec<SignRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[SignRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record containing `date`
    pub fn find(&self, date: CalendarDate) -> Option<&SignRecord> {
        match_sign(date, &self.records)
    }
}

impl From<Vec<SignRecord>> for SignCatalog {
    fn from(records: Vec<SignRecord>) -> Self {
        Self::new(records)
    }
}
