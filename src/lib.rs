//! # SMS Leases
//!
//! Activation-number leasing over the 5sim API, scoped to a single active
//! purchase country.
//!
//! The crate buys short-lived phone numbers to receive one verification SMS,
//! checks them for the first code and asks the provider to reuse them. Which
//! country numbers are bought in is kept in a [`CountryStore`], where at most
//! one country is active at any time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sms_leases::{
//!     AcquisitionService, AcquisitionServiceTrait, CountryStore, NewCountry, PgCountryStore,
//!     five_sim::FiveSimProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads FIVESIM_API_TOKEN (and optionally FIVESIM_API_URL, FIVESIM_TIMEOUT_SECS)
//!     let provider = FiveSimProvider::from_env()?;
//!     let store = PgCountryStore::connect(&std::env::var("DATABASE_URL")?).await?;
//!
//!     let usa = store.add_country(NewCountry::new("USA", "US", "usa")).await?;
//!     store.activate(usa.id).await?;
//!
//!     let service = AcquisitionService::with_provider(provider, store);
//!
//!     // Buy a number in the active country
//!     let number = service.try_purchase_number().await?;
//!     println!("Got number: {} ({})", number.phone, number.country_code);
//!
//!     // Poll once; the caller decides how often to repeat
//!     let check = service.check_code(number.id.as_ref()).await;
//!     println!("Code: {:?}", check.code);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! AcquisitionService<P, S>
//!         │
//!         ├──────────────► CountryStore   (InMemoryCountryStore, PgCountryStore)
//!         ▼
//!     Provider          (trait: FiveSimProvider)
//! ```
//!
//! ## Features
//!
//! - `postgres` - PostgreSQL country store and embedded migrations (enabled by default)
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod countries;
pub mod providers;
pub mod service;
pub mod types;
pub mod utils;

/// Embedded migrations for the PostgreSQL country store.
#[cfg(feature = "postgres")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

// Re-export commonly used types at the crate root
pub use countries::{Country, CountryField, CountryStore, CountryStoreError, InMemoryCountryStore, NewCountry};
pub use providers::{Provider, five_sim};
pub use service::{
    AcquisitionConfig, AcquisitionConfigBuilder, AcquisitionError, AcquisitionService,
    AcquisitionServiceBuilder, AcquisitionServiceTrait, CodeCheck, FallbackCountry,
    PurchaseOutcome,
};
pub use types::{
    ActivationCheck, DialCode, FullNumber, LeaseStatus, LeasedNumber, NationalNumber, Product,
    PurchasedNumber, ReusePayload, SmsCode, TaskId,
};
pub use utils::{NormalizedPhone, normalize, normalize_with_region};

#[cfg(feature = "postgres")]
pub use countries::PgCountryStore;
