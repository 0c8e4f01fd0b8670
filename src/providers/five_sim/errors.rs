//! Error types for the 5sim provider.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Error codes returned by the 5sim API.
///
/// 5sim reports most failures as a short plain-text body
/// (e.g. `no free phones`), sometimes with HTTP 200.
#[derive(Debug, Clone, PartialEq)]
pub enum FiveSimErrorCode {
    // === Inventory / availability ===
    /// No numbers left for the country/operator/product.
    NoFreePhones,
    /// Provider is down for maintenance.
    ServerOffline,

    // === Account ===
    /// Token rejected (HTTP 401).
    Unauthorized,
    /// Balance too low for the purchase.
    NotEnoughBalance,
    /// Account rating too low for the purchase.
    NotEnoughRating,

    // === Request ===
    /// Country slug missing.
    SelectCountry,
    /// Operator missing.
    SelectOperator,
    /// Unknown country slug.
    BadCountry,
    /// Unknown operator.
    BadOperator,
    /// Unknown product.
    NoProduct,
    /// Lease id unknown to the provider.
    OrderNotFound,

    // === Reuse ===
    /// Number cannot be reused for this product.
    ReuseNotPossible,
    /// Reuse refused.
    ReuseFalse,
    /// Reuse window has passed.
    ReuseExpired,

    /// Non-success HTTP status without a recognizable body.
    HttpStatus { status: u16 },
    /// Unknown error text from the service.
    Unknown { raw: String },
}

impl FiveSimErrorCode {
    /// Returns the API error text for this code.
    pub fn code_name(&self) -> &str {
        match self {
            Self::NoFreePhones => "no free phones",
            Self::ServerOffline => "server offline",
            Self::Unauthorized => "unauthorized",
            Self::NotEnoughBalance => "not enough user balance",
            Self::NotEnoughRating => "not enough rating",
            Self::SelectCountry => "select country",
            Self::SelectOperator => "select operator",
            Self::BadCountry => "bad country",
            Self::BadOperator => "bad operator",
            Self::NoProduct => "no product",
            Self::OrderNotFound => "order not found",
            Self::ReuseNotPossible => "reuse not possible",
            Self::ReuseFalse => "reuse false",
            Self::ReuseExpired => "reuse expired",
            Self::HttpStatus { .. } => "http status",
            Self::Unknown { raw } => raw.as_str(),
        }
    }

    /// Returns human-readable description.
    pub fn description(&self) -> String {
        match self {
            Self::NoFreePhones => "No free phones for this country/operator/product".to_string(),
            Self::ServerOffline => "Provider is offline".to_string(),
            Self::Unauthorized => "API token rejected".to_string(),
            Self::NotEnoughBalance => "Not enough balance".to_string(),
            Self::NotEnoughRating => "Account rating too low".to_string(),
            Self::SelectCountry => "Country is required".to_string(),
            Self::SelectOperator => "Operator is required".to_string(),
            Self::BadCountry => "Unknown country".to_string(),
            Self::BadOperator => "Unknown operator".to_string(),
            Self::NoProduct => "Unknown product".to_string(),
            Self::OrderNotFound => "Lease not found".to_string(),
            Self::ReuseNotPossible => "Number cannot be reused".to_string(),
            Self::ReuseFalse => "Reuse refused".to_string(),
            Self::ReuseExpired => "Reuse window expired".to_string(),
            Self::HttpStatus { status } => format!("Unexpected HTTP status {status}"),
            Self::Unknown { raw } => format!("Unknown error: {raw}"),
        }
    }

    /// Parse an error code from a raw response body.
    ///
    /// Returns `None` for bodies that do not look like an error text
    /// (JSON documents, empty bodies).
    pub fn from_raw(raw: &str) -> Option<Self> {
        let s = raw.trim();

        let code = match s.to_ascii_lowercase().as_str() {
            "no free phones" => Self::NoFreePhones,
            "server offline" => Self::ServerOffline,
            "not enough user balance" => Self::NotEnoughBalance,
            "not enough rating" => Self::NotEnoughRating,
            "select country" => Self::SelectCountry,
            "select operator" => Self::SelectOperator,
            "bad country" => Self::BadCountry,
            "bad operator" => Self::BadOperator,
            "no product" => Self::NoProduct,
            "order not found" | "record not found" => Self::OrderNotFound,
            "reuse not possible" => Self::ReuseNotPossible,
            "reuse false" => Self::ReuseFalse,
            "reuse expired" => Self::ReuseExpired,
            _ if Self::looks_like_error_text(s) => Self::Unknown { raw: s.to_string() },
            _ => return None,
        };

        Some(code)
    }

    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match Self::from_raw(body) {
            Some(code) => code,
            None => Self::HttpStatus { status },
        }
    }

    /// Check if a body looks like one of the provider's error texts.
    fn looks_like_error_text(s: &str) -> bool {
        if s.is_empty() || s.starts_with('{') || s.starts_with('[') {
            return false;
        }

        let known_error_prefixes = ["no ", "not ", "bad ", "select ", "reuse ", "server "];

        let lower = s.to_ascii_lowercase();
        known_error_prefixes
            .iter()
            .any(|prefix| lower.starts_with(prefix))
    }
}

impl Display for FiveSimErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus { status } => write!(f, "http status {status}"),
            other => write!(f, "{}", other.code_name()),
        }
    }
}

impl Serialize for FiveSimErrorCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FiveSimErrorCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&s).unwrap_or(Self::Unknown { raw: s }))
    }
}

/// Error returned by the 5sim service.
#[derive(Debug, Clone, Error)]
#[error("5sim service error: code={code}, status={status}, description={description}")]
pub struct FiveSimServiceError {
    /// Error code from the service.
    pub code: FiveSimErrorCode,
    /// HTTP status of the response.
    pub status: u16,
    /// Human-readable description.
    pub description: String,
    /// Original raw response text.
    pub raw: String,
}

impl FiveSimServiceError {
    /// Create new service error from code and raw response.
    pub fn new(code: FiveSimErrorCode, status: u16, raw: String) -> Self {
        let description = code.description();
        Self {
            code,
            status,
            description,
            raw,
        }
    }
}

/// Parse a 5sim error from an HTTP status and response body.
pub(crate) fn parse_five_sim_error(status: u16, raw: &str) -> Option<FiveSimServiceError> {
    let success = (200..300).contains(&status);
    let code = if success {
        FiveSimErrorCode::from_raw(raw)?
    } else {
        FiveSimErrorCode::from_status(status, raw)
    };
    let error = FiveSimServiceError::new(code, status, raw.trim().to_string());

    #[cfg(feature = "tracing")]
    warn!(
        code = %error.code,
        status = error.status,
        description = %error.description,
        "5sim service returned error"
    );

    Some(error)
}

/// Main error type for 5sim client operations.
#[derive(Debug, Error)]
pub enum FiveSimError {
    /// Required configuration value is missing.
    #[error("Missing configuration value {var}")]
    MissingConfig { var: &'static str },

    /// Configuration value could not be parsed.
    #[error("Invalid configuration value {var}: {message}")]
    InvalidConfig { var: &'static str, message: String },

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// Endpoint cannot carry path segments.
    #[error("Cannot build 5sim request URL from endpoint {endpoint}")]
    BuildRequestUrl { endpoint: String },

    /// Failed to send HTTP request.
    #[error("Failed to send HTTP request: {0}")]
    HttpRequest(#[from] reqwest_middleware::Error),

    /// Failed to read the response body.
    #[error("Failed to read response: {0}")]
    ReadResponse(#[source] reqwest::Error),

    /// 5sim service error.
    #[error("5sim service error: {0}")]
    Service(#[source] FiveSimServiceError),

    /// Failed to deserialize JSON response.
    #[error("Failed to deserialize JSON response: {0}")]
    DeserializeJson(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FiveSimError>;

impl FiveSimError {
    /// Service error code, when the provider answered with one.
    pub fn service_code(&self) -> Option<&FiveSimErrorCode> {
        match self {
            FiveSimError::Service(error) => Some(&error.code),
            _ => None,
        }
    }

    /// True when the provider could not be reached or answered with a
    /// server-side failure, as opposed to rejecting the request.
    pub fn is_unavailable(&self) -> bool {
        match self {
            FiveSimError::HttpRequest(_) | FiveSimError::ReadResponse(_) => true,
            FiveSimError::Service(error) => {
                error.status >= 500 || error.code == FiveSimErrorCode::ServerOffline
            }
            FiveSimError::MissingConfig { .. }
            | FiveSimError::InvalidConfig { .. }
            | FiveSimError::BuildHttpClient(_)
            | FiveSimError::BuildRequestUrl { .. }
            | FiveSimError::DeserializeJson(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_errors() {
        let test_cases = vec![
            ("no free phones", FiveSimErrorCode::NoFreePhones),
            ("not enough user balance", FiveSimErrorCode::NotEnoughBalance),
            ("bad country", FiveSimErrorCode::BadCountry),
            ("no product", FiveSimErrorCode::NoProduct),
            ("reuse not possible", FiveSimErrorCode::ReuseNotPossible),
        ];

        for (input, expected) in test_cases {
            let error = parse_five_sim_error(200, input).unwrap();
            assert_eq!(error.code, expected);
            assert_eq!(error.raw, input);
        }
    }

    #[test]
    fn test_unknown_error_text() {
        let error = parse_five_sim_error(200, "no luck today").unwrap();
        assert_eq!(
            error.code,
            FiveSimErrorCode::Unknown {
                raw: "no luck today".to_string()
            }
        );
    }

    #[test]
    fn test_json_success_not_treated_as_error() {
        assert!(parse_five_sim_error(200, r#"{"id": 1}"#).is_none());
        assert!(parse_five_sim_error(200, "[]").is_none());
        assert!(parse_five_sim_error(200, "").is_none());
    }

    #[test]
    fn test_status_errors() {
        let error = parse_five_sim_error(401, "").unwrap();
        assert_eq!(error.code, FiveSimErrorCode::Unauthorized);

        let error = parse_five_sim_error(500, "<html>oops</html>").unwrap();
        assert_eq!(error.code, FiveSimErrorCode::HttpStatus { status: 500 });

        let error = parse_five_sim_error(400, "bad operator").unwrap();
        assert_eq!(error.code, FiveSimErrorCode::BadOperator);
    }

    #[test]
    fn test_unavailable_classification() {
        let offline = FiveSimError::Service(parse_five_sim_error(200, "server offline").unwrap());
        assert!(offline.is_unavailable());

        let rejected = FiveSimError::Service(parse_five_sim_error(400, "bad country").unwrap());
        assert!(!rejected.is_unavailable());
        assert_eq!(rejected.service_code(), Some(&FiveSimErrorCode::BadCountry));
    }
}
