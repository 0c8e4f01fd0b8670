//! Purchasable countries and the single active one.

pub(crate) mod error;
pub(crate) mod memory;
pub(crate) mod model;
pub(crate) mod traits;

#[cfg(feature = "postgres")]
pub(crate) mod postgres;

pub use error::CountryStoreError;
pub use memory::InMemoryCountryStore;
pub use model::{Country, CountryField, NewCountry};
pub use traits::CountryStore;

#[cfg(feature = "postgres")]
pub use postgres::PgCountryStore;
