//! 5sim provider.
//!
//! Thin HTTP client for the activation endpoints of <https://5sim.net>
//! plus a [`Provider`](crate::Provider) implementation on top of it.

mod client;
mod config;
mod errors;
mod provider;
mod response;
mod types;

pub use client::{ANY_OPERATOR, FiveSim, FiveSimClientBuilder};
pub use config::{API_TOKEN_ENV, API_URL_ENV, DEFAULT_API_URL, FiveSimConfig, TIMEOUT_ENV};
pub use errors::{FiveSimError, FiveSimErrorCode, FiveSimServiceError, Result};
pub use provider::FiveSimProvider;
pub use response::{FiveSimResponse, FiveSimTextResponse};
pub use types::{BuyResponse, CheckResponse, SmsEntry};
