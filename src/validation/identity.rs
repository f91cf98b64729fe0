//! DNI, NIE and CIF checks, and the dispatcher choosing between them

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::InputError;
use crate::models::{IdentityKind, IdentityResult};

// Letter classes are spelled out in ASCII: `(?i)` folds Unicode case and
// would let characters such as U+017F or U+212A through.
static DNI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{8})([A-Za-z])$").expect("Failed to compile DNI regex")
});

static NIE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([XYZxyz])([0-9]{7})([A-Za-z])$").expect("Failed to compile NIE regex")
});

static CIF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ABCDEFGHJNPQRSUVW])([0-9]{7})([0-9A-J])$")
        .expect("Failed to compile CIF regex")
});

/// Check letters indexed by `number % 23`
const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// CIF control letters indexed by the control digit
const CIF_CONTROL_LETTERS: &[u8; 10] = b"JABCDEFGHI";

/// Organization types whose CIF ends with a letter instead of a digit
const LETTER_CONTROL_TYPES: [char; 6] = ['K', 'P', 'Q', 'S', 'N', 'W'];

fn control_letter(number: u32) -> char {
    CONTROL_LETTERS[(number % 23) as usize] as char
}

fn letter_matches(number: &str, letter: &str) -> bool {
    let Ok(number) = number.parse::<u32>() else {
        return false;
    };
    letter.eq_ignore_ascii_case(&control_letter(number).to_string())
}

/// Checks a DNI: 8 digits followed by their mod-23 check letter.
pub fn validate_dni(dni: &str) -> bool {
    let Some(captures) = DNI_REGEX.captures(dni) else {
        return false;
    };
    letter_matches(&captures[1], &captures[2])
}

/// Checks a NIE: X, Y or Z, 7 digits and a check letter. The leading letter
/// stands for the digit 0, 1 or 2 in front of the number.
pub fn validate_nie(nie: &str) -> bool {
    let Some(captures) = NIE_REGEX.captures(nie) else {
        return false;
    };

    let prefix = match captures[1].to_ascii_uppercase().as_str() {
        "X" => '0',
        "Y" => '1',
        "Z" => '2',
        _ => return false,
    };

    let number = format!("{prefix}{}", &captures[2]);
    letter_matches(&number, &captures[3])
}

/// Computes the CIF control digit of the 7 central digits.
///
/// Digits at even positions are doubled and their two digits added back
/// together, digits at odd positions are added as they are.
fn cif_control_digit(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled / 10 + doubled % 10
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    (10 - sum % 10) % 10
}

/// Checks a CIF: organization letter, 7 digits and a control character,
/// which is a letter for the types in `LETTER_CONTROL_TYPES` and a digit for
/// every other type. Lowercase input is accepted.
pub fn validate_cif(cif: &str) -> bool {
    let cif = cif.to_ascii_uppercase();
    let Some(captures) = CIF_REGEX.captures(&cif) else {
        return false;
    };

    let Some(org_type) = captures[1].chars().next() else {
        return false;
    };
    let control = &captures[3];

    let control_digit = cif_control_digit(&captures[2]);

    if LETTER_CONTROL_TYPES.contains(&org_type) {
        let control_letter = CIF_CONTROL_LETTERS[control_digit as usize] as char;
        control == control_letter.to_string()
    } else {
        control == control_digit.to_string()
    }
}

/// Works out which document `id` looks like and checks it.
///
/// Fails only when `id` is blank. Anything that matches none of the
/// document shapes comes back as `IdentityKind::Unknown`.
pub fn validate_identity(id: &str) -> Result<IdentityResult, InputError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyIdentity);
    }

    let normalized_id = trimmed.to_uppercase();

    let (kind, is_valid) = if DNI_REGEX.is_match(&normalized_id) {
        (IdentityKind::Dni, validate_dni(&normalized_id))
    } else if NIE_REGEX.is_match(&normalized_id) {
        (IdentityKind::Nie, validate_nie(&normalized_id))
    } else if CIF_REGEX.is_match(&normalized_id) {
        (IdentityKind::Cif, validate_cif(&normalized_id))
    } else {
        (IdentityKind::Unknown, false)
    };

    debug!("Identity {normalized_id} classified as {kind}, valid: {is_valid}");

    Ok(IdentityResult {
        raw_input: id.to_owned(),
        normalized_id,
        kind,
        is_valid,
    })
}
