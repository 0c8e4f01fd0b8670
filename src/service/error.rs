//! Service-level error types.

use crate::countries::CountryStoreError;
use std::error::Error as StdError;
use thiserror::Error;

/// Service-level errors that wrap provider and store errors.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// Error from the underlying provider.
    #[error("SMS provider error: {source}")]
    Provider {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Error from the country store.
    #[error("Country store error: {0}")]
    Store(#[from] CountryStoreError),

    /// No country is active and the fallback is disabled.
    #[error("No active country and no fallback configured")]
    NoActiveCountry,

    /// A required argument was empty.
    #[error("Missing required input: {field}")]
    MissingInput { field: &'static str },

    /// An argument had characters that do not belong in it.
    #[error("Invalid input: {field}")]
    InvalidInput { field: &'static str },
}

impl AcquisitionError {
    pub(crate) fn provider<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AcquisitionError::Provider {
            source: Box::new(error),
        }
    }
}
