//! Country store errors.

use super::model::CountryField;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by a [`CountryStore`](super::CountryStore).
#[derive(Debug, Error)]
pub enum CountryStoreError {
    /// Required fields were empty after trimming.
    #[error("Missing required fields: {}", field_list(missing))]
    Validation { missing: Vec<CountryField> },

    /// No country with this id.
    #[error("Country {id} not found")]
    NotFound { id: Uuid },

    /// Database failure.
    #[cfg(feature = "postgres")]
    #[error("Country store database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CountryStoreError>;

fn field_list(fields: &[CountryField]) -> String {
    fields
        .iter()
        .map(CountryField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
