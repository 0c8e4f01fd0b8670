//! Phone normalization across calling codes.

use sms_leases::{DialCode, normalize, normalize_with_region};

/// Popular countries with a sample number in international form.
const SAMPLES: &[(&str, &str, &str, &str)] = &[
    ("US", "1", "+1 202 555 0143", "2025550143"),
    ("GB", "44", "+44 7400 123456", "7400123456"),
    ("UA", "380", "+380 50 123 4567", "501234567"),
    ("DE", "49", "+49 1512 3456789", "15123456789"),
    ("FR", "33", "+33 6 12 34 56 78", "612345678"),
    ("IT", "39", "+39 312 345 6789", "3123456789"),
    ("ES", "34", "+34 612 34 56 78", "612345678"),
    ("PL", "48", "+48 512 345 678", "512345678"),
    ("NL", "31", "+31 6 12345678", "612345678"),
    ("IN", "91", "+91 98765 43210", "9876543210"),
    ("BR", "55", "+55 11 91234 5678", "11912345678"),
    ("RU", "7", "+7 912 345 67 89", "9123456789"),
    ("KZ", "7", "+7 701 234 5678", "7012345678"),
    ("CI", "225", "+225 07 01 23 45 67", "0701234567"),
];

#[test]
fn test_popular_countries() {
    for (alpha2, dial_code, raw, national) in SAMPLES {
        let parsed = normalize(raw);

        assert_eq!(
            parsed.dial_code.as_ref().map(DialCode::as_str),
            Some(*dial_code),
            "calling code of {raw}"
        );
        assert_eq!(
            parsed.national_number.as_ref().map(|n| n.as_str()),
            Some(*national),
            "national number of {raw}"
        );
        assert_eq!(
            parsed.country.as_ref().map(|c| c.alpha2().to_string()),
            Some(alpha2.to_string()),
            "country of {raw}"
        );
    }
}

#[test]
fn test_round_trip_for_samples() {
    for (_, _, raw, _) in SAMPLES {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(normalize(raw).international_digits(), Some(digits));
    }
}

#[test]
fn test_shared_calling_codes() {
    assert_eq!(
        normalize("+1 416 555 0199")
            .country
            .map(|c| c.alpha2().to_string()),
        Some("CA".to_string())
    );
    assert_eq!(
        normalize("+1 242 555 1234")
            .country
            .map(|c| c.alpha2().to_string()),
        Some("BS".to_string())
    );
    assert_eq!(
        normalize_with_region("+1 416 555 0199", Some("CA"))
            .country
            .map(|c| c.alpha2().to_string()),
        Some("CA".to_string())
    );
    assert_eq!(
        normalize_with_region("+7 701 123 4567", Some("KZ"))
            .country
            .map(|c| c.alpha2().to_string()),
        Some("KZ".to_string())
    );
}

#[test]
fn test_national_form_needs_region() {
    assert!(normalize("07700 900123").is_empty());

    let parsed = normalize_with_region("07700 900123", Some("GB"));
    assert_eq!(parsed.national_number.unwrap().as_str(), "7700900123");
    assert_eq!(parsed.dial_code.unwrap().as_str(), "44");
}

#[test]
fn test_leading_zero_national_numbers() {
    for (raw, dial_code, national) in [
        ("+39 06 6981 2345", "39", "0669812345"),
        ("+225 07 01 23 45 67", "225", "0701234567"),
    ] {
        let parsed = normalize(raw);
        assert!(!parsed.is_empty(), "{raw:?} should parse");
        assert_eq!(parsed.dial_code.unwrap().as_str(), dial_code);
        assert_eq!(parsed.national_number.unwrap().as_str(), national);
    }

    let rome = normalize("+390669812345");
    assert_eq!(rome.international_digits().as_deref(), Some("390669812345"));
}

#[test]
fn test_unparseable_inputs() {
    for raw in ["", "   ", "phone", "+", "+44 abc", "12", "+44 0"] {
        let parsed = normalize(raw);
        assert!(parsed.is_empty(), "{raw:?} should not parse");
        assert!(parsed.country.is_none());
        assert!(parsed.dial_code.is_none());
    }
}
