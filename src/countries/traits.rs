//! Country store trait definition.

use super::error::Result;
use super::model::{Country, NewCountry};
use std::future::Future;
use uuid::Uuid;

/// Catalogue of purchasable countries with a single active one.
///
/// Implementations must keep "at most one active country" true for every
/// reader, including while [`activate`](CountryStore::activate) calls race.
pub trait CountryStore: Send + Sync {
    /// All countries, active one first, then newest first.
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>>> + Send;

    /// Validate and insert a new, inactive country.
    fn add_country(&self, input: NewCountry) -> impl Future<Output = Result<Country>> + Send;

    /// The active country, if one has been activated.
    fn get_active_country(&self) -> impl Future<Output = Result<Option<Country>>> + Send;

    /// Look a country up by id.
    fn find_country(&self, id: Uuid) -> impl Future<Output = Result<Option<Country>>> + Send;

    /// Make `id` the only active country and return it.
    ///
    /// Unknown ids fail with `NotFound` and change nothing.
    fn activate(&self, id: Uuid) -> impl Future<Output = Result<Country>> + Send;
}
