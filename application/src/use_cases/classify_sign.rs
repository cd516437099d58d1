//! Classify sign use case
//!
//! Turns a submitted birth date into the matching sign record. The catalog
//! is read from its source on first use and shared read-only afterward.

use crate::ports::sign_catalog::{CatalogError, SignCatalogSource};
use cadastro_domain::{CalendarDate, DateInputError, SignCatalog, SignRecord};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Message shown when no sign can be determined
pub const MSG_NO_SIGN: &str = "Não foi possível determinar o signo para a data informada.";

/// Errors that can occur while classifying a date
///
/// `NoMatch` and `CatalogUnavailable` show the same message to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error(transparent)]
    InvalidDate(#[from] DateInputError),

    #[error("{}", MSG_NO_SIGN)]
    NoMatch(CalendarDate),

    #[error("{}", MSG_NO_SIGN)]
    CatalogUnavailable(CatalogError),
}

/// Use case for classifying a birth date
pub struct ClassifySignUseCase<S: SignCatalogSource + 'static> {
    source: Arc<S>,
    catalog: OnceCell<SignCatalog>,
}

impl<S: SignCatalogSource + 'static> ClassifySignUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// The loaded catalog, reading the source on first call
    ///
    /// A failed read is not cached; the next call tries the source again.
    pub async fn catalog(&self) -> Result<&SignCatalog, CatalogError> {
        self.catalog
            .get_or_try_init(|| async {
                let records = self.source.load().await?;
                info!(
                    "Loaded {} sign records from {}",
                    records.len(),
                    self.source.describe()
                );
                Ok::<_, CatalogError>(SignCatalog::new(records))
            })
            .await
    }

    /// Classify a date typed by the user
    ///
    /// `today` bounds the accepted dates from above.
    pub async fn execute(&self, raw_date: &str, today: NaiveDate) -> Result<SignRecord, ClassifyError> {
        let date = CalendarDate::parse_input(raw_date, today)?;
        self.classify(date).await
    }

    /// Classify an already parsed date
    pub async fn classify(&self, date: CalendarDate) -> Result<SignRecord, ClassifyError> {
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("No classification possible: {}", e);
                return Err(ClassifyError::CatalogUnavailable(e));
            }
        };

        match catalog.find(date) {
            Some(sign) => {
                debug!("{:02}/{:02} classified as {}", date.day, date.month, sign.name);
                Ok(sign.clone())
            }
            None => {
                info!(
                    "No sign covers {:02}/{:02} in a catalog of {} records",
                    date.day,
                    date.month,
                    catalog.len()
                );
                Err(ClassifyError::NoMatch(date))
            }
        }
    }
}
