//! Calling code tables built from keshvar.
//!
//! Used when libphonenumber metadata cannot tell which of the countries
//! sharing a calling code a number belongs to.

use crate::types::DialCode;
use keshvar::{Country, CountryIterator};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Calling code -> alpha-2 codes sharing it, sorted.
static DIAL_CODE2ALPHA2: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for country in CountryIterator::new() {
        let code = country.country_code().to_string();
        if code.is_empty() || code.starts_with('0') {
            continue;
        }
        map.entry(code)
            .or_default()
            .push(country.alpha2().to_string());
    }
    for alpha2s in map.values_mut() {
        alpha2s.sort();
    }
    map
});

/// Overrides: shared calling code -> the country a bare number resolves to.
/// Used where several countries share one code and no region hint applies.
static PREFERRED_ALPHA2: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1", "US"),
        ("7", "RU"),
        ("44", "GB"),
        ("39", "IT"),
        ("47", "NO"),
        ("61", "AU"),
        ("212", "MA"),
        ("262", "RE"),
        ("290", "SH"),
        ("358", "FI"),
        ("590", "GP"),
        ("599", "CW"),
    ])
});

/// Resolve a calling code to a country.
///
/// `region_hint` (alpha-2) wins when it shares the calling code.
pub(crate) fn dial_code_to_country(dial_code: &DialCode, region_hint: Option<&str>) -> Option<Country> {
    let candidates = DIAL_CODE2ALPHA2.get(dial_code.as_str())?;

    let hinted = region_hint
        .map(str::to_ascii_uppercase)
        .filter(|hint| candidates.iter().any(|c| c == hint));

    let alpha2 = hinted
        .or_else(|| {
            PREFERRED_ALPHA2
                .get(dial_code.as_str())
                .map(|s| (*s).to_string())
        })
        .or_else(|| candidates.first().cloned())?;

    Country::try_from(alpha2.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keshvar::Alpha2;

    #[test]
    fn test_shared_code_prefers_table_then_hint() {
        let one = DialCode::new("1").unwrap();
        assert_eq!(
            dial_code_to_country(&one, None).map(|c| c.alpha2()),
            Some(Alpha2::US)
        );
        assert_eq!(
            dial_code_to_country(&one, Some("ca")).map(|c| c.alpha2()),
            Some(Alpha2::CA)
        );
        // A hint outside the shared group is ignored.
        assert_eq!(
            dial_code_to_country(&one, Some("GB")).map(|c| c.alpha2()),
            Some(Alpha2::US)
        );
    }
}
