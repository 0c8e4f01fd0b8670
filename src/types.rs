//! Core types for activation-number leasing.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// TaskId
// =============================================================================

/// Provider-assigned identifier of a number lease.
///
/// 5sim hands out numeric ids while callers usually carry them around as
/// path segments, so the id is kept as a string and deserializes from either
/// a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaskId(String);

impl TaskId {
    /// Create a new TaskId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// True when the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct TaskIdVisitor;

        impl de::Visitor<'_> for TaskIdVisitor {
            type Value = TaskId;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a lease id as a string or an integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaskId, E> {
                Ok(TaskId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TaskId, E> {
                Ok(TaskId::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TaskId, E> {
                Ok(TaskId(v))
            }
        }

        d.deserialize_any(TaskIdVisitor)
    }
}

// =============================================================================
// SmsCode (OTP)
// =============================================================================

/// SMS verification code (OTP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SmsCode(pub String);

impl SmsCode {
    /// Create a new SmsCode.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SmsCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SmsCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SmsCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for SmsCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

// =============================================================================
// FullNumber
// =============================================================================

/// Phone number exactly as the provider returned it (e.g. "+447700900123").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullNumber(String);

impl FullNumber {
    /// Create a new FullNumber.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number in the form the provider's reuse endpoint expects:
    /// digits only, no leading '+'.
    pub fn path_form(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl Display for FullNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FullNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for FullNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl From<&str> for FullNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// Country calling code (e.g. "1" for USA, "44" for the United Kingdom).
///
/// Stored without the leading '+'.
///
/// ```rust
/// use sms_leases::DialCode;
///
/// let dc = DialCode::new("+44").unwrap();
/// assert_eq!(dc.to_string(), "44");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// NationalNumber
// =============================================================================

/// Error when parsing a national number.
#[derive(Debug, Clone, Error)]
pub enum NumberError {
    /// Number contains non-digit characters.
    #[error("number must contain only digits")]
    NonDigit,
    /// Number has invalid length.
    #[error("number must be between 4 and 14 digits")]
    InvalidLength,
}

/// National significant number, without the calling code
/// (e.g. "7700900123" for "+447700900123").
///
/// # Validation Rules
///
/// - Must contain only digits
/// - Must be between 4 and 14 digits
///
/// Leading zeros are kept where the numbering plan dials them after the
/// calling code (e.g. "0669812345" for the Rome landline "+390669812345").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalNumber(String);

impl NationalNumber {
    /// Create a new NationalNumber from a string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, NumberError> {
        let s = s.as_ref().trim();
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(NumberError::NonDigit);
        }
        let len = s.len();
        if !(4..=14).contains(&len) {
            return Err(NumberError::InvalidLength);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NationalNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for NationalNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// LeasedNumber
// =============================================================================

/// A number bought from the provider, in the shape handed to callers.
///
/// Serializes as `{id, phone, operator, country, countryCode}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasedNumber {
    /// Provider lease id, used for polling and reuse.
    pub id: TaskId,
    /// National number when the raw phone could be parsed, raw phone otherwise.
    pub phone: String,
    /// Operator the provider picked.
    pub operator: String,
    /// Parsed country name, or the provider's country slug.
    pub country: String,
    /// Regional code of the country the purchase was scoped to.
    pub country_code: String,
}

// =============================================================================
// Product
// =============================================================================

/// Product (verification target) a number is bought for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Product {
    /// Amazon (code: "amazon").
    #[default]
    Amazon,
    /// Google / Gmail / YouTube (code: "google").
    Google,
    /// Telegram (code: "telegram").
    Telegram,
    /// WhatsApp (code: "whatsapp").
    Whatsapp,
    /// Any other provider product code.
    Other { code: String },
}

impl Product {
    /// Get the product code used in provider URLs.
    pub fn code(&self) -> &str {
        match self {
            Product::Amazon => "amazon",
            Product::Google => "google",
            Product::Telegram => "telegram",
            Product::Whatsapp => "whatsapp",
            Product::Other { code } => code.as_str(),
        }
    }

    /// Create a Product from a code string.
    pub fn from_code<S: AsRef<str>>(code: S) -> Self {
        match code.as_ref() {
            "amazon" => Product::Amazon,
            "google" => Product::Google,
            "telegram" => Product::Telegram,
            "whatsapp" => Product::Whatsapp,
            other => Product::Other {
                code: other.to_string(),
            },
        }
    }
}

impl FromStr for Product {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Product::from_code(s))
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// LeaseStatus
// =============================================================================

/// Lease status as tracked by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaseStatus {
    /// Bought, waiting for an SMS.
    Pending,
    /// At least one SMS arrived.
    Received,
    /// Cancelled by the buyer.
    Canceled,
    /// Expired without being finished.
    Timeout,
    /// Finished by the buyer.
    Finished,
    /// Number banned by the target service.
    Banned,
    /// Status string this crate does not know.
    Other(String),
}

impl LeaseStatus {
    /// Parse a provider status string.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "PENDING" => Self::Pending,
            "RECEIVED" => Self::Received,
            "CANCELED" => Self::Canceled,
            "TIMEOUT" => Self::Timeout,
            "FINISHED" => Self::Finished,
            "BANNED" => Self::Banned,
            other => Self::Other(other.to_string()),
        }
    }

    /// Provider spelling of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Received => "RECEIVED",
            Self::Canceled => "CANCELED",
            Self::Timeout => "TIMEOUT",
            Self::Finished => "FINISHED",
            Self::Banned => "BANNED",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// True once the provider will no longer deliver SMS for the lease.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::Timeout | Self::Finished | Self::Banned
        )
    }
}

impl Display for LeaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeaseStatus {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(LeaseStatus::from_raw(&raw))
    }
}

impl Serialize for LeaseStatus {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

// =============================================================================
// Provider results
// =============================================================================

/// A number as returned by a provider purchase, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedNumber {
    /// Provider lease id.
    pub task_id: TaskId,
    /// Phone as returned by the provider.
    pub phone: FullNumber,
    /// Operator the provider picked.
    pub operator: String,
    /// Provider country slug the number belongs to.
    pub country: String,
    /// Lease status at purchase time, when reported.
    pub status: Option<LeaseStatus>,
}

/// Result of a single status check on a lease.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationCheck {
    /// Provider status of the lease, when reported.
    pub status: Option<LeaseStatus>,
    /// First received code; `None` while no SMS has arrived.
    pub code: Option<SmsCode>,
}

impl ActivationCheck {
    /// A check that found no SMS yet.
    pub fn waiting(status: Option<LeaseStatus>) -> Self {
        Self { status, code: None }
    }

    /// True when a code has arrived.
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }
}

/// Provider payload of a reuse request, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReusePayload {
    /// JSON body.
    Json(serde_json::Value),
    /// Non-JSON text body.
    Text(String),
}

impl ReusePayload {
    /// Wrap a raw response body, keeping JSON structure when there is one.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body)
            .map(Self::Json)
            .unwrap_or_else(|_| Self::Text(body.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_from_number_and_string() {
        let id: TaskId = serde_json::from_str("11631253").unwrap();
        assert_eq!(id.as_ref(), "11631253");

        let id: TaskId = serde_json::from_str(r#""11631253""#).unwrap();
        assert_eq!(id.to_string(), "11631253");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""11631253""#);
    }

    #[test]
    fn test_task_id_blank() {
        assert!(TaskId::from("  ").is_blank());
        assert!(!TaskId::from(42u64).is_blank());
    }

    #[test]
    fn test_sms_code() {
        let code = SmsCode::new("123456");
        assert_eq!(code.as_str(), "123456");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""123456""#);
    }

    #[test]
    fn test_full_number_path_form() {
        assert_eq!(FullNumber::new("+447700900123").path_form(), "447700900123");
        assert_eq!(FullNumber::new("+1 (202) 555-0143").path_form(), "12025550143");
    }

    #[test]
    fn test_dial_code_with_plus() {
        let dc = DialCode::new("+380").unwrap();
        assert_eq!(dc.as_str(), "380");
    }

    #[test]
    fn test_dial_code_empty() {
        assert!(matches!(DialCode::new(""), Err(DialCodeError::Empty)));
        assert!(matches!(DialCode::new("+"), Err(DialCodeError::Empty)));
    }

    #[test]
    fn test_dial_code_non_digit() {
        assert!(matches!(DialCode::new("12a"), Err(DialCodeError::NonDigit)));
    }

    #[test]
    fn test_national_number_rules() {
        assert!(NationalNumber::new("7700900123").is_ok());
        assert!(matches!(
            NationalNumber::new("123"),
            Err(NumberError::InvalidLength)
        ));
        assert_eq!(
            NationalNumber::new("0669812345").unwrap().as_str(),
            "0669812345"
        );
        assert!(matches!(
            NationalNumber::new("77a0"),
            Err(NumberError::NonDigit)
        ));
    }

    #[test]
    fn test_leased_number_wire_shape() {
        let leased = LeasedNumber {
            id: TaskId::from(1u64),
            phone: "7700900123".into(),
            operator: "vodafone".into(),
            country: "United Kingdom".into(),
            country_code: "GB".into(),
        };
        let json = serde_json::to_value(&leased).unwrap();
        assert_eq!(json["countryCode"], "GB");
        assert_eq!(json["id"], "1");
    }

    #[test]
    fn test_product_codes() {
        assert_eq!(Product::default().code(), "amazon");
        assert_eq!(Product::from_code("telegram"), Product::Telegram);
        assert_eq!(
            Product::from_code("vinted"),
            Product::Other {
                code: "vinted".to_string()
            }
        );
    }

    #[test]
    fn test_lease_status_from_raw() {
        let status: LeaseStatus = serde_json::from_str(r#""RECEIVED""#).unwrap();
        assert_eq!(status, LeaseStatus::Received);
        assert!(!status.is_closed());
        assert!(LeaseStatus::from_raw("FINISHED").is_closed());
        assert_eq!(
            LeaseStatus::from_raw("PREPARING"),
            LeaseStatus::Other("PREPARING".to_string())
        );
    }

    #[test]
    fn test_reuse_payload_keeps_json_or_text() {
        let json = ReusePayload::from_body(r#"{"id": 7, "status": "PENDING"}"#);
        assert!(matches!(json, ReusePayload::Json(ref v) if v["id"] == 7));

        let text = ReusePayload::from_body("success\n");
        assert_eq!(text, ReusePayload::Text("success".to_string()));
    }
}
