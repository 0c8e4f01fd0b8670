//! Main service implementation.

use super::config::{AcquisitionConfig, AcquisitionConfigBuilder, FallbackCountry};
use super::error::AcquisitionError;
use super::outcome::{CodeCheck, PurchaseOutcome};
use super::traits::AcquisitionServiceTrait;
use crate::countries::CountryStore;
use crate::providers::traits::Provider;
use crate::types::{ActivationCheck, FullNumber, LeasedNumber, ReusePayload, TaskId};
use crate::utils::phone::{is_phone_shaped, normalize_with_region};

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

/// Number-acquisition workflow over any [`Provider`] and [`CountryStore`].
///
/// Handles:
/// - buying a number in the store's active country (or the fallback)
/// - checking a lease for its first SMS code
/// - asking the provider to reuse a number
///
/// Leases are never stored here; callers carry the lease id between calls
/// and decide how often to poll.
///
/// # Type Parameters
///
/// - `P`: The provider implementation (e.g., `FiveSimProvider`)
/// - `S`: The country store (e.g., `PgCountryStore`)
///
/// # Example
///
/// ```rust,ignore
/// use sms_leases::{AcquisitionService, AcquisitionServiceTrait, InMemoryCountryStore};
/// use sms_leases::five_sim::FiveSimProvider;
///
/// let provider = FiveSimProvider::from_env()?;
/// let service = AcquisitionService::with_provider(provider, InMemoryCountryStore::new());
///
/// let outcome = service.purchase_number().await;
/// if let Some(number) = outcome.data {
///     let check = service.check_code(number.id.as_ref()).await;
///     println!("Code: {:?}", check.code);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AcquisitionService<P: Provider, S: CountryStore> {
    provider: P,
    countries: S,
    config: AcquisitionConfig,
}

/// Country a purchase is scoped to.
struct PurchaseTarget {
    slug: String,
    country_code: String,
}

impl<P: Provider, S: CountryStore> AcquisitionService<P, S> {
    /// Create a new service with a custom configuration.
    pub fn new(provider: P, countries: S, config: AcquisitionConfig) -> Self {
        Self {
            provider,
            countries,
            config,
        }
    }

    /// Create a new service with default configuration.
    pub fn with_provider(provider: P, countries: S) -> Self {
        Self::new(provider, countries, AcquisitionConfig::default())
    }

    /// Create a new builder for AcquisitionService.
    pub fn builder(provider: P, countries: S) -> AcquisitionServiceBuilder<P, S> {
        AcquisitionServiceBuilder::new(provider, countries)
    }

    /// Get reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Country store purchases are scoped by.
    pub fn countries(&self) -> &S {
        &self.countries
    }

    /// Get reference to the service configuration.
    pub fn config(&self) -> &AcquisitionConfig {
        &self.config
    }

    async fn purchase_target(&self) -> Result<PurchaseTarget, AcquisitionError> {
        if let Some(active) = self.countries.get_active_country().await? {
            return Ok(PurchaseTarget {
                slug: active.api_country_name,
                country_code: active.country_code,
            });
        }

        let FallbackCountry {
            api_country_name,
            country_code,
        } = self
            .config
            .fallback_country
            .clone()
            .ok_or(AcquisitionError::NoActiveCountry)?;

        #[cfg(feature = "tracing")]
        debug!(slug = %api_country_name, "No active country, using fallback");

        Ok(PurchaseTarget {
            slug: api_country_name,
            country_code,
        })
    }

    /// Buy a number; any failure becomes `{status: false, data: null}`.
    pub async fn purchase_number(&self) -> PurchaseOutcome {
        match self.try_purchase_number().await {
            Ok(number) => PurchaseOutcome::success(number),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_e, "Number purchase failed");
                PurchaseOutcome::failure()
            }
        }
    }

    /// Check a lease; no SMS yet and failures both yield `{status: false}`.
    pub async fn check_code(&self, lease_id: &str) -> CodeCheck {
        match self.try_check_code(lease_id).await {
            Ok(check) => CodeCheck::from(check.code),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_e, lease_id = %lease_id, "Code check failed");
                CodeCheck::empty()
            }
        }
    }

    /// Request reuse; `None` means the reuse could not be confirmed.
    pub async fn request_reuse(&self, phone: &str) -> Option<ReusePayload> {
        match self.try_request_reuse(phone).await {
            Ok(payload) => Some(payload),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                warn!(error = %_e, "Reuse request failed");
                None
            }
        }
    }
}

impl<P: Provider, S: CountryStore> AcquisitionServiceTrait for AcquisitionService<P, S> {
    type Error = AcquisitionError;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "acquisition.purchase_number", skip_all)
    )]
    async fn try_purchase_number(&self) -> Result<LeasedNumber, Self::Error> {
        let target = self.purchase_target().await?;

        let purchased = self
            .provider
            .buy_activation_number(&target.slug, &self.config.operator, &self.config.product)
            .await
            .map_err(AcquisitionError::provider)?;

        let normalized =
            normalize_with_region(purchased.phone.as_str(), Some(target.country_code.as_str()));

        let phone = match &normalized.national_number {
            Some(national) => national.to_string(),
            None => purchased.phone.to_string(),
        };
        let country = match normalized.country_name() {
            Some(name) => name.to_string(),
            None => purchased.country,
        };

        #[cfg(feature = "tracing")]
        info!(
            task_id = %purchased.task_id,
            slug = %target.slug,
            country_code = %target.country_code,
            parsed = !normalized.is_empty(),
            "Phone number acquired"
        );

        Ok(LeasedNumber {
            id: purchased.task_id,
            phone,
            operator: purchased.operator,
            country,
            country_code: target.country_code,
        })
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "acquisition.check_code", skip_all, fields(lease_id = %lease_id))
    )]
    async fn try_check_code(&self, lease_id: &str) -> Result<ActivationCheck, Self::Error> {
        let task_id = TaskId::from(lease_id.trim());
        if task_id.is_blank() {
            return Err(AcquisitionError::MissingInput { field: "lease_id" });
        }

        let check = self
            .provider
            .check_activation(&task_id)
            .await
            .map_err(AcquisitionError::provider)?;

        #[cfg(feature = "tracing")]
        if check.has_code() {
            info!("SMS code received");
        } else {
            debug!(status = ?check.status, "No SMS yet");
        }

        Ok(check)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "acquisition.request_reuse", skip_all)
    )]
    async fn try_request_reuse(&self, phone: &str) -> Result<ReusePayload, Self::Error> {
        let raw = phone.trim();
        let phone = FullNumber::new(raw);
        if phone.path_form().is_empty() {
            return Err(AcquisitionError::MissingInput { field: "phone" });
        }
        if !is_phone_shaped(raw) {
            return Err(AcquisitionError::InvalidInput { field: "phone" });
        }

        let payload = self
            .provider
            .mark_for_reuse(&phone, &self.config.product)
            .await
            .map_err(AcquisitionError::provider)?;

        #[cfg(feature = "tracing")]
        info!(product = %self.config.product, "Number marked for reuse");

        Ok(payload)
    }
}

/// Builder for AcquisitionService.
///
/// # Example
///
/// ```rust,ignore
/// use sms_leases::{AcquisitionService, FallbackCountry, Product};
///
/// let service = AcquisitionService::builder(provider, store)
///     .product(Product::Telegram)
///     .fallback_country(FallbackCountry::new("usa", "US"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AcquisitionServiceBuilder<P: Provider, S: CountryStore> {
    provider: P,
    countries: S,
    config_builder: AcquisitionConfigBuilder,
}

impl<P: Provider, S: CountryStore> AcquisitionServiceBuilder<P, S> {
    pub fn new(provider: P, countries: S) -> Self {
        Self {
            provider,
            countries,
            config_builder: AcquisitionConfigBuilder::default(),
        }
    }

    /// Set the operator.
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.operator(operator);
        self
    }

    /// Set the product.
    pub fn product(mut self, product: crate::types::Product) -> Self {
        self.config_builder = self.config_builder.product(product);
        self
    }

    /// Set the country used while none is active.
    pub fn fallback_country(mut self, fallback: FallbackCountry) -> Self {
        self.config_builder = self.config_builder.fallback_country(fallback);
        self
    }

    /// Fail purchases while no country is active.
    pub fn without_fallback(mut self) -> Self {
        self.config_builder = self.config_builder.without_fallback();
        self
    }

    /// Build the AcquisitionService.
    pub fn build(self) -> AcquisitionService<P, S> {
        AcquisitionService::new(self.provider, self.countries, self.config_builder.build())
    }
}
