//! Country records.

use super::error::CountryStoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// A country numbers can be purchased in.
///
/// At most one country is `current` at any time; purchases are scoped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Uuid,
    /// Display name.
    pub country_name: String,
    /// Short regional code, e.g. `GB`.
    pub country_code: String,
    /// Provider slug used in purchase requests, e.g. `england`.
    pub api_country_name: String,
    pub current: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for adding a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCountry {
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub api_country_name: String,
}

impl NewCountry {
    pub fn new(
        country_name: impl Into<String>,
        country_code: impl Into<String>,
        api_country_name: impl Into<String>,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            country_code: country_code.into(),
            api_country_name: api_country_name.into(),
        }
    }

    /// Trim every field and reject the input if any of them ends up empty.
    ///
    /// The error lists all empty fields, in declaration order.
    pub fn validated(&self) -> Result<NewCountry, CountryStoreError> {
        let trimmed = NewCountry {
            country_name: self.country_name.trim().to_string(),
            country_code: self.country_code.trim().to_string(),
            api_country_name: self.api_country_name.trim().to_string(),
        };

        let missing: Vec<CountryField> = [
            (CountryField::CountryName, &trimmed.country_name),
            (CountryField::CountryCode, &trimmed.country_code),
            (CountryField::ApiCountryName, &trimmed.api_country_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(trimmed)
        } else {
            Err(CountryStoreError::Validation { missing })
        }
    }

    /// Build a fresh, inactive row. Expects already validated input.
    pub(crate) fn into_country(self) -> Country {
        Country {
            id: Uuid::new_v4(),
            country_name: self.country_name,
            country_code: self.country_code,
            api_country_name: self.api_country_name,
            current: false,
            created_at: Utc::now(),
        }
    }
}

/// Required field of a [`NewCountry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountryField {
    CountryName,
    CountryCode,
    ApiCountryName,
}

impl CountryField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryField::CountryName => "countryName",
            CountryField::CountryCode => "countryCode",
            CountryField::ApiCountryName => "apiCountryName",
        }
    }
}

impl Display for CountryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
