//! 5sim HTTP client.

use super::config::FiveSimConfig;
use super::errors::{FiveSimError, Result};
use super::response::{FiveSimResponse, FiveSimTextResponse};
use super::types::{BuyResponse, CheckResponse};
use crate::types::{FullNumber, Product, ReusePayload, TaskId};
use reqwest::header::ACCEPT;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::Span;
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Operator value that lets the provider pick any operator.
pub const ANY_OPERATOR: &str = "any";

/// 5sim HTTP client.
///
/// Every call is a single GET with the bearer token from
/// [`FiveSimConfig`]. Nothing is retried: a repeated purchase would buy and
/// pay for a second number.
///
/// # Example
///
/// ```rust,ignore
/// use sms_leases::five_sim::FiveSim;
/// use sms_leases::Product;
///
/// let client = FiveSim::with_api_token("your_token")?;
///
/// let bought = client.buy_activation_number("england", "any", &Product::Amazon).await?;
/// println!("Got number: {}", bought.phone);
///
/// let check = client.check(&bought.id).await?;
/// println!("First code: {:?}", check.first_code());
/// ```
#[derive(Clone)]
pub struct FiveSim {
    http_client: ClientWithMiddleware,
    config: FiveSimConfig,
}

impl std::fmt::Debug for FiveSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FiveSimClient")
            .field("endpoint", self.config.endpoint())
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

/// Builder for configuring a [`FiveSim`].
pub struct FiveSimClientBuilder {
    config: FiveSimConfig,
    http_client: Option<ClientWithMiddleware>,
}

impl FiveSimClientBuilder {
    /// Create a new builder from a config.
    pub fn new(config: FiveSimConfig) -> Self {
        Self {
            config,
            http_client: None,
        }
    }

    /// Set a custom API endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config = self.config.with_endpoint(endpoint);
        self
    }

    /// Set a custom HTTP client with middleware.
    ///
    /// The config's timeout is not applied to a custom client.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`FiveSim`].
    pub fn build(self) -> Result<FiveSim> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.config.timeout() {
                    builder = builder.timeout(timeout);
                }
                let client = builder.build().map_err(FiveSimError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(FiveSim {
            http_client,
            config: self.config,
        })
    }
}

impl FiveSim {
    /// Create a new 5sim client.
    ///
    /// # Arguments
    /// * `endpoint` - Base URL for the 5sim API (e.g. `https://5sim.net/v1`)
    /// * `api_token` - Bearer token
    pub fn new(endpoint: impl AsRef<str>, api_token: impl Into<String>) -> Result<Self> {
        let url = Url::parse(endpoint.as_ref()).map_err(|_| FiveSimError::BuildRequestUrl {
            endpoint: endpoint.as_ref().to_string(),
        })?;

        Self::builder(FiveSimConfig::new(api_token)?)
            .endpoint(url)
            .build()
    }

    /// Create a new client with the default API URL.
    pub fn with_api_token(api_token: impl Into<String>) -> Result<Self> {
        Self::builder(FiveSimConfig::new(api_token)?).build()
    }

    /// Create a client from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::builder(FiveSimConfig::from_env()?).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(config: FiveSimConfig) -> FiveSimClientBuilder {
        FiveSimClientBuilder::new(config)
    }

    /// Config the client was built with.
    pub fn config(&self) -> &FiveSimConfig {
        &self.config
    }

    /// Build request URL by appending path segments to the endpoint.
    fn build_request_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.endpoint().clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| FiveSimError::BuildRequestUrl {
                    endpoint: self.config.endpoint().to_string(),
                })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Send an authorized GET request and return status and body.
    async fn send_request(&self, url: Url) -> Result<(u16, String)> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.config.api_token())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FiveSimError::HttpRequest)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(FiveSimError::ReadResponse)?;

        Ok((status, text))
    }

    /// Buy an activation number.
    ///
    /// # Arguments
    /// * `country` - Provider country slug (e.g. "england")
    /// * `operator` - Operator name, or [`ANY_OPERATOR`]
    /// * `product` - What the number will be used for
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSim::buy_activation_number",
            skip_all,
            fields(
                country = %country,
                operator = %operator,
                product = %product,
                task_id = tracing::field::Empty,
            )
        )
    )]
    pub async fn buy_activation_number(
        &self,
        country: &str,
        operator: &str,
        product: &Product,
    ) -> Result<BuyResponse> {
        let url = self.build_request_url(&[
            "user",
            "buy",
            "activation",
            country,
            operator,
            product.code(),
        ])?;

        let (status, text) = self.send_request(url).await?;

        let response = FiveSimResponse::<BuyResponse>::from_http(status, &text)
            .map_err(FiveSimError::DeserializeJson)?;

        let data = response.into_result().map_err(FiveSimError::Service)?;

        #[cfg(feature = "tracing")]
        {
            Span::current()
                .record("task_id", data.id.as_ref())
                .set_status(Status::Ok);
        }

        Ok(data)
    }

    /// Check a lease for received messages.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSim::check",
            skip_all,
            fields(task_id = %task_id, sms_count = tracing::field::Empty)
        )
    )]
    pub async fn check(&self, task_id: &TaskId) -> Result<CheckResponse> {
        let url = self.build_request_url(&["user", "check", task_id.as_ref()])?;

        let (status, text) = self.send_request(url).await?;

        let response = FiveSimResponse::<CheckResponse>::from_http(status, &text)
            .map_err(FiveSimError::DeserializeJson)?;

        let data = response.into_result().map_err(FiveSimError::Service)?;

        #[cfg(feature = "tracing")]
        {
            let sms_count = data.sms.as_ref().map_or(0, Vec::len);
            Span::current()
                .record("sms_count", sms_count)
                .set_status(Status::Ok);
        }

        Ok(data)
    }

    /// Ask the provider to make a previously leased number available again.
    ///
    /// The success body is returned untouched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "FiveSim::reuse",
            skip_all,
            fields(product = %product)
        )
    )]
    pub async fn reuse(&self, phone: &FullNumber, product: &Product) -> Result<ReusePayload> {
        let number = phone.path_form();
        let url = self.build_request_url(&["user", "reuse", product.code(), &number])?;

        let (status, text) = self.send_request(url).await?;

        let body = FiveSimTextResponse::from_http(status, &text)
            .into_result()
            .map_err(FiveSimError::Service)?;

        #[cfg(feature = "tracing")]
        Span::current().set_status(Status::Ok);

        Ok(ReusePayload::from_body(&body))
    }
}
