//! Number-acquisition workflow: purchase, code check, reuse.

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod outcome;
pub(crate) mod structure;
pub(crate) mod traits;

pub use config::{AcquisitionConfig, AcquisitionConfigBuilder, FallbackCountry};
pub use error::AcquisitionError;
pub use outcome::{CodeCheck, PurchaseOutcome};
pub use structure::{AcquisitionService, AcquisitionServiceBuilder};
pub use traits::AcquisitionServiceTrait;
