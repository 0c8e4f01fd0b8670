//! Types for 5sim API responses.

use crate::types::{LeaseStatus, SmsCode, TaskId};
use serde::{Deserialize, Serialize};

/// Response from `GET /user/buy/activation/{country}/{operator}/{product}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyResponse {
    /// Lease id.
    pub id: TaskId,
    /// Phone number, usually with a leading '+' and calling code.
    pub phone: String,
    /// Operator the number belongs to.
    pub operator: String,
    /// Product the number was bought for.
    #[serde(default)]
    pub product: Option<String>,
    /// Price charged.
    #[serde(default)]
    pub price: Option<f64>,
    /// Lease status.
    #[serde(default)]
    pub status: Option<LeaseStatus>,
    /// When the lease expires.
    #[serde(default)]
    pub expires: Option<String>,
    /// When the lease was created.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Provider country slug.
    #[serde(default)]
    pub country: String,
}

/// Response from `GET /user/check/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Lease id.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Phone number of the lease.
    #[serde(default)]
    pub phone: Option<String>,
    /// Lease status.
    #[serde(default)]
    pub status: Option<LeaseStatus>,
    /// Messages received so far; `null` and missing both mean none.
    #[serde(default)]
    pub sms: Option<Vec<SmsEntry>>,
}

impl CheckResponse {
    /// Code of the first received message.
    ///
    /// Falls back to the message text when the provider could not extract
    /// a code from it.
    pub fn first_code(&self) -> Option<SmsCode> {
        let first = self.sms.as_ref()?.first()?;
        let code = first.code.trim();
        if !code.is_empty() {
            return Some(SmsCode::new(code));
        }
        let text = first.text.trim();
        (!text.is_empty()).then(|| SmsCode::new(text))
    }
}

/// A single received message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsEntry {
    /// Code extracted by the provider.
    #[serde(default)]
    pub code: String,
    /// Full message text.
    #[serde(default)]
    pub text: String,
    /// Sender name.
    #[serde(default)]
    pub sender: Option<String>,
    /// When the message was sent.
    #[serde(default)]
    pub date: Option<String>,
    /// When the provider received the message.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_response_deserialization() {
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
            "forwarding": false,
            "forwarding_number": "",
            "country": "england"
        }"#;

        let response: BuyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id.as_ref(), "11631253");
        assert_eq!(response.operator, "vodafone");
        assert_eq!(response.status, Some(LeaseStatus::Pending));
        assert_eq!(response.price, Some(21.0));
    }

    #[test]
    fn test_check_response_with_code() {
        let json = r#"{
            "id": 11631253,
            "status": "RECEIVED",
            "sms": [
                {"created_at": "2025-01-01T12:05:00Z", "date": "2025-01-01T12:05:00Z",
                 "sender": "Amazon", "text": "Your code is 123456", "code": "123456"},
                {"created_at": "2025-01-01T12:06:00Z", "date": "2025-01-01T12:06:00Z",
                 "sender": "Amazon", "text": "Your code is 654321", "code": "654321"}
            ]
        }"#;

        let response: CheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_code(), Some(SmsCode::new("123456")));
    }

    #[test]
    fn test_check_response_without_sms() {
        let empty: CheckResponse = serde_json::from_str(r#"{"status": "PENDING", "sms": []}"#).unwrap();
        assert!(empty.first_code().is_none());

        let null: CheckResponse = serde_json::from_str(r#"{"status": "PENDING", "sms": null}"#).unwrap();
        assert!(null.first_code().is_none());

        let missing: CheckResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.first_code().is_none());
    }

    #[test]
    fn test_first_code_falls_back_to_text() {
        let json = r#"{"sms": [{"code": "", "text": "G-778812 is your code"}]}"#;
        let response: CheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_code(),
            Some(SmsCode::new("G-778812 is your code"))
        );
    }
}
