//! Response parsing for the 5sim API.

use super::errors::{FiveSimServiceError, parse_five_sim_error};
use serde::de::DeserializeOwned;

/// Unified response type for 5sim API calls.
#[derive(Debug)]
pub enum FiveSimResponse<T> {
    Success(T),
    Error(FiveSimServiceError),
}

impl<T> FiveSimResponse<T> {
    /// Convert response into a Result for ergonomic error handling.
    pub fn into_result(self) -> Result<T, FiveSimServiceError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Error(e) => Err(e),
        }
    }

    /// Check if response is successful without consuming.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T: DeserializeOwned> FiveSimResponse<T> {
    /// Parse a 5sim response from HTTP status and body.
    ///
    /// Non-success statuses and plain-text error bodies become
    /// [`FiveSimResponse::Error`]; anything else must be the JSON document.
    pub fn from_http(status: u16, text: &str) -> Result<Self, serde_json::Error> {
        if let Some(error) = parse_five_sim_error(status, text) {
            return Ok(Self::Error(error));
        }

        let data = serde_json::from_str::<T>(text)?;
        Ok(Self::Success(data))
    }
}

/// Response type for endpoints whose success body is passed through as-is.
#[derive(Debug)]
pub enum FiveSimTextResponse {
    Success(String),
    Error(FiveSimServiceError),
}

impl FiveSimTextResponse {
    /// Parse response from HTTP status and body.
    pub fn from_http(status: u16, text: &str) -> Self {
        if let Some(error) = parse_five_sim_error(status, text) {
            Self::Error(error)
        } else {
            Self::Success(text.to_string())
        }
    }

    /// Convert to Result.
    pub fn into_result(self) -> Result<String, FiveSimServiceError> {
        match self {
            Self::Success(text) => Ok(text),
            Self::Error(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::five_sim::errors::FiveSimErrorCode;
    use crate::providers::five_sim::types::BuyResponse;

    #[test]
    fn test_json_response_success() {
        let json = r#"{
            "id": 11631253,
            "phone": "+447700900123",
            "operator": "vodafone",
            "product": "amazon",
            "price": 21,
            "status": "PENDING",
            "expires": "2025-01-01T12:20:00Z",
            "sms": null,
            "created_at": "2025-01-01T12:00:00Z",
            "country": "england"
        }"#;

        let response = FiveSimResponse::<BuyResponse>::from_http(200, json).unwrap();
        assert!(response.is_success());
        let data = response.into_result().unwrap();
        assert_eq!(data.phone, "+447700900123");
    }

    #[test]
    fn test_json_response_error() {
        let response = FiveSimResponse::<BuyResponse>::from_http(200, "no free phones").unwrap();
        assert!(!response.is_success());

        match response.into_result() {
            Err(error) => assert_eq!(error.code, FiveSimErrorCode::NoFreePhones),
            Ok(_) => panic!("Expected error"),
        }
    }

    #[test]
    fn test_server_error_status() {
        let response = FiveSimResponse::<BuyResponse>::from_http(500, "").unwrap();
        match response.into_result() {
            Err(error) => {
                assert_eq!(error.code, FiveSimErrorCode::HttpStatus { status: 500 });
                assert_eq!(error.status, 500);
            }
            Ok(_) => panic!("Expected error"),
        }
    }

    #[test]
    fn test_text_response() {
        match FiveSimTextResponse::from_http(200, "success") {
            FiveSimTextResponse::Success(s) => assert_eq!(s, "success"),
            FiveSimTextResponse::Error(_) => panic!("Expected success"),
        }

        match FiveSimTextResponse::from_http(200, "reuse expired") {
            FiveSimTextResponse::Success(_) => panic!("Expected error"),
            FiveSimTextResponse::Error(e) => assert_eq!(e.code, FiveSimErrorCode::ReuseExpired),
        }
    }
}
