//! Status-flag shapes handed to route handlers.

use crate::types::{LeasedNumber, SmsCode};
use serde::{Deserialize, Serialize};

/// Result of a purchase as serialized for callers: `{status, data}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub status: bool,
    pub data: Option<LeasedNumber>,
}

impl PurchaseOutcome {
    pub fn success(data: LeasedNumber) -> Self {
        Self {
            status: true,
            data: Some(data),
        }
    }

    pub fn failure() -> Self {
        Self {
            status: false,
            data: None,
        }
    }
}

/// Result of a code check as serialized for callers: `{status, code}`.
///
/// `status` is false both while no SMS has arrived and on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCheck {
    pub status: bool,
    pub code: Option<SmsCode>,
}

impl CodeCheck {
    pub fn received(code: SmsCode) -> Self {
        Self {
            status: true,
            code: Some(code),
        }
    }

    pub fn empty() -> Self {
        Self {
            status: false,
            code: None,
        }
    }
}

impl From<Option<SmsCode>> for CodeCheck {
    fn from(code: Option<SmsCode>) -> Self {
        code.map_or_else(Self::empty, Self::received)
    }
}
