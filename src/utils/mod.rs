//! Phone number helpers.

pub(crate) mod dial_code;
pub mod phone;

pub use phone::{NormalizedPhone, normalize, normalize_with_region};
