//! IBAN structure and mod-97 checksum

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::IbanResult;

static IBAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{4,30}$").expect("Failed to compile IBAN regex")
});

/// Spanish IBANs have a fixed length. No other country's length is checked.
const SPANISH_IBAN_LENGTH: usize = 24;

fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// Remainder modulo 97 of the numeral obtained by writing every letter as
/// its value (A = 10 ... Z = 35).
///
/// The numeral of a 34-character IBAN has up to 68 digits, so the remainder
/// is carried one digit at a time instead of parsing the whole number.
fn mod97(rearranged: &str) -> Option<u32> {
    rearranged.chars().try_fold(0u32, |remainder, c| {
        let value = c.to_digit(36)?;
        let remainder = if value < 10 {
            remainder * 10 + value
        } else {
            remainder * 100 + value
        };
        Some(remainder % 97)
    })
}

fn checksum_matches(iban: &str) -> bool {
    if !IBAN_REGEX.is_match(iban) {
        return false;
    }

    if iban.starts_with("ES") && iban.len() != SPANISH_IBAN_LENGTH {
        return false;
    }

    let (head, tail) = iban.split_at(4);
    let rearranged = format!("{tail}{head}");

    mod97(&rearranged) == Some(1)
}

/// Validates an IBAN, ignoring spaces, dashes and case.
pub fn validate_iban(iban: &str) -> bool {
    checksum_matches(&normalize(iban))
}

/// Same as `validate_iban`, keeping the normalized IBAN for display.
pub fn check_iban(iban: &str) -> IbanResult {
    let normalized = normalize(iban);
    IbanResult {
        is_valid: checksum_matches(&normalized),
        normalized,
    }
}
