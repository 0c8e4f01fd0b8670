//! 5sim provider implementation.

use super::client::FiveSim;
use super::errors::{FiveSimError, Result};
use crate::providers::traits::Provider;
use crate::types::{ActivationCheck, FullNumber, Product, PurchasedNumber, ReusePayload, TaskId};

#[cfg(feature = "tracing")]
use tracing::debug;

/// 5sim provider implementation.
///
/// Wraps the [`FiveSim`] client and implements the generic [`Provider`]
/// trait on top of it.
///
/// # Example
///
/// ```rust,ignore
/// use sms_leases::five_sim::{FiveSim, FiveSimProvider};
/// use sms_leases::{Provider, Product};
///
/// let client = FiveSim::from_env()?;
/// let provider = FiveSimProvider::new(client);
///
/// let number = provider.buy_activation_number("england", "any", &Product::Amazon).await?;
/// let check = provider.check_activation(&number.task_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FiveSimProvider {
    client: FiveSim,
}

impl FiveSimProvider {
    /// Create a new 5sim provider.
    pub fn new(client: FiveSim) -> Self {
        Self { client }
    }

    /// Create a provider from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(FiveSim::from_env()?))
    }

    /// Get reference to the inner client.
    pub fn client(&self) -> &FiveSim {
        &self.client
    }
}

impl Provider for FiveSimProvider {
    type Error = FiveSimError;

    async fn buy_activation_number(
        &self,
        country: &str,
        operator: &str,
        product: &Product,
    ) -> Result<PurchasedNumber> {
        let response = self
            .client
            .buy_activation_number(country, operator, product)
            .await?;

        Ok(PurchasedNumber {
            task_id: response.id,
            phone: FullNumber::from(response.phone),
            operator: response.operator,
            country: response.country,
            status: response.status,
        })
    }

    async fn check_activation(&self, task_id: &TaskId) -> Result<ActivationCheck> {
        let response = self.client.check(task_id).await?;

        let code = response.first_code();

        #[cfg(feature = "tracing")]
        if code.is_some() {
            debug!(task_id = %task_id, "SMS code received");
        }

        Ok(ActivationCheck {
            status: response.status,
            code,
        })
    }

    async fn mark_for_reuse(&self, phone: &FullNumber, product: &Product) -> Result<ReusePayload> {
        self.client.reuse(phone, product).await
    }
}
