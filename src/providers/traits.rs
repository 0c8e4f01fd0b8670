//! Provider trait definition.

use crate::types::{ActivationCheck, FullNumber, Product, PurchasedNumber, ReusePayload, TaskId};
use std::error::Error as StdError;
use std::future::Future;

/// Core trait that all number-leasing providers must implement.
///
/// A provider can:
/// - sell a number for a country, operator and product
/// - report whether an SMS arrived for a lease
/// - put a previously leased number back up for reuse
///
/// Every operation is a single attempt. Failures, including provider-side
/// refusals such as "no free phones", come back as `Err(Self::Error)`.
///
/// # Note on async methods
///
/// All async methods in this trait return `Send` futures, making them
/// compatible with multi-threaded executors.
///
/// # Example
///
/// ```rust,ignore
/// use sms_leases::{Provider, Product, TaskId, FullNumber};
/// use sms_leases::{ActivationCheck, PurchasedNumber, ReusePayload};
///
/// #[derive(Clone)]
/// struct MyProvider { /* ... */ }
///
/// impl Provider for MyProvider {
///     type Error = MyError;
///
///     async fn buy_activation_number(&self, country: &str, operator: &str, product: &Product) -> Result<PurchasedNumber, Self::Error> {
///         // Buy a number
///     }
///
///     async fn check_activation(&self, task_id: &TaskId) -> Result<ActivationCheck, Self::Error> {
///         // Look for a received SMS
///     }
///
///     async fn mark_for_reuse(&self, phone: &FullNumber, product: &Product) -> Result<ReusePayload, Self::Error> {
///         // Ask for the number again
///     }
/// }
/// ```
pub trait Provider: Send + Sync + Clone {
    /// Error type returned by provider operations.
    type Error: StdError + Send + Sync + 'static;

    /// Buy an activation number.
    ///
    /// # Arguments
    /// * `country` - Provider country slug (e.g. "england")
    /// * `operator` - Operator name, "any" lets the provider choose
    /// * `product` - Product the number is bought for
    fn buy_activation_number(
        &self,
        country: &str,
        operator: &str,
        product: &Product,
    ) -> impl Future<Output = Result<PurchasedNumber, Self::Error>> + Send;

    /// Check a lease once.
    ///
    /// # Returns
    /// * `code: Some(..)` - first received SMS code
    /// * `code: None` - nothing received yet, caller may poll again
    fn check_activation(
        &self,
        task_id: &TaskId,
    ) -> impl Future<Output = Result<ActivationCheck, Self::Error>> + Send;

    /// Ask the provider to make a previously leased number available again.
    ///
    /// The provider's success payload is returned unchanged.
    fn mark_for_reuse(
        &self,
        phone: &FullNumber,
        product: &Product,
    ) -> impl Future<Output = Result<ReusePayload, Self::Error>> + Send;
}
