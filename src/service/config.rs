//! Service configuration types.

use crate::types::Product;

/// Operator used when none is configured.
pub const DEFAULT_OPERATOR: &str = "any";
/// Provider slug used when no country is active.
pub const DEFAULT_FALLBACK_SLUG: &str = "england";
/// Regional code reported with [`DEFAULT_FALLBACK_SLUG`].
pub const DEFAULT_FALLBACK_CODE: &str = "GB";

/// Country purchases fall back to while no country is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCountry {
    /// Provider slug, e.g. `england`.
    pub api_country_name: String,
    /// Regional code, e.g. `GB`.
    pub country_code: String,
}

impl FallbackCountry {
    pub fn new(api_country_name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            api_country_name: api_country_name.into(),
            country_code: country_code.into(),
        }
    }
}

impl Default for FallbackCountry {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_SLUG, DEFAULT_FALLBACK_CODE)
    }
}

/// Configuration for the acquisition service.
#[derive(Debug, Clone)]
pub struct AcquisitionConfig {
    /// Operator sent with every purchase.
    pub operator: String,
    /// Product numbers are bought and reused for.
    pub product: Product,
    /// Country used while none is active; `None` makes purchases fail instead.
    pub fallback_country: Option<FallbackCountry>,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_string(),
            product: Product::default(),
            fallback_country: Some(FallbackCountry::default()),
        }
    }
}

impl AcquisitionConfig {
    /// Create a new builder for AcquisitionConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sms_leases::{AcquisitionConfig, Product};
    ///
    /// let config = AcquisitionConfig::builder()
    ///     .product(Product::Telegram)
    ///     .without_fallback()
    ///     .build();
    ///
    /// assert_eq!(config.operator, "any");
    /// assert_eq!(config.product, Product::Telegram);
    /// assert!(config.fallback_country.is_none());
    /// ```
    pub fn builder() -> AcquisitionConfigBuilder {
        AcquisitionConfigBuilder::default()
    }

    /// Fail purchases while no country is active.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_country = None;
        self
    }
}

/// Builder for AcquisitionConfig.
#[derive(Debug, Clone, Default)]
pub struct AcquisitionConfigBuilder {
    config: AcquisitionConfig,
}

impl AcquisitionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operator.
    ///
    /// Default: "any"
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.config.operator = operator.into();
        self
    }

    /// Set the product.
    ///
    /// Default: Amazon
    pub fn product(mut self, product: Product) -> Self {
        self.config.product = product;
        self
    }

    /// Set the country used while none is active.
    ///
    /// Default: england / GB
    pub fn fallback_country(mut self, fallback: FallbackCountry) -> Self {
        self.config.fallback_country = Some(fallback);
        self
    }

    /// Fail purchases while no country is active.
    pub fn without_fallback(mut self) -> Self {
        self.config.fallback_country = None;
        self
    }

    pub fn build(self) -> AcquisitionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AcquisitionConfig::default();
        assert_eq!(config.operator, "any");
        assert_eq!(config.product, Product::Amazon);
        assert_eq!(
            config.fallback_country,
            Some(FallbackCountry::new("england", "GB"))
        );
    }

    #[test]
    fn test_config_builder() {
        let config = AcquisitionConfig::builder()
            .operator("vodafone")
            .product(Product::Google)
            .fallback_country(FallbackCountry::new("usa", "US"))
            .build();

        assert_eq!(config.operator, "vodafone");
        assert_eq!(config.product, Product::Google);
        assert_eq!(
            config.fallback_country.unwrap().api_country_name,
            "usa"
        );
    }

    #[test]
    fn test_without_fallback() {
        let config = AcquisitionConfig::default().without_fallback();
        assert!(config.fallback_country.is_none());
    }
}
