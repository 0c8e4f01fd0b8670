//! Service trait definition.

use crate::types::{ActivationCheck, LeasedNumber, ReusePayload};
use std::error::Error as StdError;
use std::future::Future;

/// Trait for number-acquisition service implementations.
///
/// This trait abstracts the service interface, allowing different
/// service implementations to be used interchangeably.
pub trait AcquisitionServiceTrait: Send + Sync {
    /// The error type for this service.
    type Error: StdError;

    /// Buy a number in the active country.
    ///
    /// The active country is read on every call, so activations take effect
    /// for the next purchase.
    fn try_purchase_number(&self) -> impl Future<Output = Result<LeasedNumber, Self::Error>> + Send;

    /// Check a lease once for a received code.
    ///
    /// # Arguments
    ///
    /// * `lease_id` - The id from a purchased [`LeasedNumber`]
    fn try_check_code(
        &self,
        lease_id: &str,
    ) -> impl Future<Output = Result<ActivationCheck, Self::Error>> + Send;

    /// Ask the provider to make a number available again.
    ///
    /// # Arguments
    ///
    /// * `phone` - Full phone number, with or without a leading `+`
    fn try_request_reuse(
        &self,
        phone: &str,
    ) -> impl Future<Output = Result<ReusePayload, Self::Error>> + Send;
}
