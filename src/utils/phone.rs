//! Phone number normalization.
//!
//! Turns the raw phone string a provider returns into a calling code, a
//! national significant number and the country the number belongs to, using
//! libphonenumber metadata. Parsing never fails loudly: anything that cannot
//! be interpreted yields an empty [`NormalizedPhone`] and the caller keeps the
//! raw values.

use super::dial_code::dial_code_to_country;
use crate::types::{DialCode, NationalNumber};
use keshvar::Country;
use once_cell::sync::Lazy;
use phonenumber::PhoneNumber;
use phonenumber::country::Id;
use regex::Regex;

/// Characters a printable phone number may contain.
pub(crate) static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().\-]*$").expect("phone shape regex is valid"));

/// Result of [`normalize`]. Every field is `None` when parsing failed.
#[derive(Debug, Clone, Default)]
pub struct NormalizedPhone {
    /// Country owning the calling code.
    pub country: Option<Country>,
    /// Calling code without '+'.
    pub dial_code: Option<DialCode>,
    /// National significant number.
    pub national_number: Option<NationalNumber>,
}

impl NormalizedPhone {
    /// True when the raw phone could not be interpreted.
    pub fn is_empty(&self) -> bool {
        self.national_number.is_none()
    }

    /// Short ISO name of the parsed country.
    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().map(Country::iso_short_name)
    }

    /// Calling code followed by national number, digits only.
    pub fn international_digits(&self) -> Option<String> {
        let dial_code = self.dial_code.as_ref()?;
        let national = self.national_number.as_ref()?;
        Some(format!("{dial_code}{national}"))
    }
}

/// Normalize a phone string that carries its calling code.
///
/// ```rust
/// use sms_leases::utils::phone::normalize;
///
/// let parsed = normalize("+44 7700 900123");
/// assert_eq!(parsed.national_number.unwrap().as_str(), "7700900123");
/// ```
pub fn normalize(raw: &str) -> NormalizedPhone {
    normalize_with_region(raw, None)
}

/// True when `raw` only holds characters a printed phone number may contain.
pub(crate) fn is_phone_shaped(raw: &str) -> bool {
    PHONE_SHAPE.is_match(raw.trim())
}

/// Normalize a phone string, using `region` (alpha-2) for numbers written
/// in national form and to pick between countries sharing a calling code
/// when the number itself does not tell them apart.
pub fn normalize_with_region(raw: &str, region: Option<&str>) -> NormalizedPhone {
    let raw = raw.trim();
    if !PHONE_SHAPE.is_match(raw) {
        return NormalizedPhone::default();
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let region_id = region.and_then(|r| r.trim().to_ascii_uppercase().parse::<Id>().ok());

    let parsed = if raw.starts_with('+') {
        parse_international(&digits)
    } else if let Some(rest) = digits.strip_prefix("00") {
        parse_international(rest)
    } else if digits.starts_with('0') {
        parse_national(&digits, region_id)
    } else {
        // Bare digits: trust the calling-code reading only when it forms a
        // valid number.
        parse_international(&digits)
            .filter(phonenumber::is_valid)
            .or_else(|| parse_national(&digits, region_id))
            .or_else(|| parse_international(&digits))
    };

    parsed
        .and_then(|number| to_normalized(&number, region))
        .unwrap_or_default()
}

fn parse_international(digits: &str) -> Option<PhoneNumber> {
    phonenumber::parse(None, format!("+{digits}")).ok()
}

fn parse_national(digits: &str, region: Option<Id>) -> Option<PhoneNumber> {
    phonenumber::parse(Some(region?), digits).ok()
}

fn to_normalized(number: &PhoneNumber, region: Option<&str>) -> Option<NormalizedPhone> {
    let dial_code = DialCode::new(number.code().value().to_string()).ok()?;

    let national = number.national();
    let national_digits = format!(
        "{}{}",
        "0".repeat(usize::from(national.zeros())),
        national.value()
    );
    let national_number = NationalNumber::new(national_digits).ok()?;

    let country = number
        .country()
        .id()
        .and_then(|id| Country::try_from(id.as_ref()).ok())
        .or_else(|| dial_code_to_country(&dial_code, region));

    Some(NormalizedPhone {
        country,
        dial_code: Some(dial_code),
        national_number: Some(national_number),
    })
}
