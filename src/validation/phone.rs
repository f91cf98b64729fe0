//! Spanish phone number classification

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{PhoneCategory, PhoneResult};

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[67][0-9]{8}$").expect("Failed to compile mobile regex"));

static LANDLINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[89][0-9]{8}$").expect("Failed to compile landline regex"));

const SPANISH_COUNTRY_CODE: &str = "34";

fn classify(national: &str) -> Option<PhoneResult> {
    let category = if MOBILE_REGEX.is_match(national) {
        PhoneCategory::Mobile
    } else if LANDLINE_REGEX.is_match(national) {
        PhoneCategory::Landline
    } else {
        return None;
    };

    Some(PhoneResult {
        is_valid: true,
        category,
        prefix: Some(national[..3].to_owned()),
    })
}

/// Classifies a Spanish phone number as mobile or landline.
///
/// Everything but digits is ignored, so `+34 612 345 678` and `612-345-678`
/// are the same number. A leading `34` is taken as the country code when
/// what follows is a valid national number.
pub fn validate_phone(phone: &str) -> PhoneResult {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    digits
        .strip_prefix(SPANISH_COUNTRY_CODE)
        .and_then(classify)
        .or_else(|| classify(&digits))
        .unwrap_or_else(PhoneResult::invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_numbers() {
        let cases = vec![
            ("+34 612 345 678", "612"),
            ("612345678", "612"),
            ("612-345-678", "612"),
            ("(+34) 712.345.678", "712"),
        ];

        for (phone, prefix) in cases {
            let result = validate_phone(phone);
            assert!(result.is_valid, "Valid mobile {} was rejected !", phone);
            assert_eq!(result.category, PhoneCategory::Mobile);
            assert_eq!(result.prefix.as_deref(), Some(prefix));
        }
    }

    #[test]
    fn test_landline_numbers() {
        let cases = vec![
            ("912345678", "912"),
            ("+34 912 34 56 78", "912"),
            ("34 812 345 678", "812"),
        ];

        for (phone, prefix) in cases {
            let result = validate_phone(phone);
            assert!(result.is_valid, "Valid landline {} was rejected !", phone);
            assert_eq!(result.category, PhoneCategory::Landline);
            assert_eq!(result.prefix.as_deref(), Some(prefix));
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let invalid_cases = vec![
            "512345678", // Not a Spanish prefix
            "+34 512 345 678",
            "61234567",        // Too short
            "6123456789",      // Too long
            "+33 612 345 678", // Other country
            "no digits here",
            "",
        ];

        for phone in invalid_cases {
            assert_eq!(
                validate_phone(phone),
                PhoneResult::invalid(),
                "Invalid phone {} was accepted !",
                phone
            );
        }
    }

    #[test]
    fn test_international_dialing_prefix_is_not_stripped() {
        assert_eq!(validate_phone("0034612345678"), PhoneResult::invalid());
    }

    #[test]
    fn test_country_code_is_optional() {
        assert_eq!(validate_phone("+34612345678"), validate_phone("612345678"));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(validate_phone("+34 612 345 678"), validate_phone("+34 612 345 678"));
    }
}
