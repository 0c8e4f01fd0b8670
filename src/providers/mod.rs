//! Number-leasing provider implementations.

pub(crate) mod traits;

pub mod five_sim;

pub use traits::Provider;
