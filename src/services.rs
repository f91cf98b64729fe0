//! Single entry point for a validation request coming from the user interface.

use log::info;
use serde_json::json;

use crate::errors::InputError;
use crate::models::{Outcome, ValidationType};
use crate::validation::{check_iban, validate_email, validate_identity, validate_phone};

/// Runs the validator matching `validation_type` on `input`.
///
/// Blank input is refused for every type before any validator runs.
pub fn validate(validation_type: ValidationType, input: &str) -> Result<Outcome, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::EmptyValue);
    }

    let outcome = match validation_type {
        ValidationType::Nif => Outcome::Identity(validate_identity(input)?),
        ValidationType::Iban => Outcome::Iban(check_iban(input)),
        ValidationType::Phone => Outcome::Phone {
            input: input.to_owned(),
            result: validate_phone(input),
        },
        ValidationType::Email => Outcome::Email {
            input: input.to_owned(),
            result: validate_email(input),
        },
    };

    info!(
        "Validated {}",
        json!({ "kind": validation_type, "valid": outcome.is_valid(), "outcome": &outcome })
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EmailClassification, EmailResult, IbanResult, IdentityKind, IdentityResult, PhoneCategory,
        PhoneResult,
    };
    use strum::IntoEnumIterator;

    #[test]
    fn test_blank_input_is_refused_for_every_type() {
        for validation_type in ValidationType::iter() {
            for input in ["", "  ", "\t"] {
                assert_eq!(
                    validate(validation_type, input),
                    Err(InputError::EmptyValue),
                    "Blank input accepted for {}",
                    validation_type
                );
            }
        }
    }

    #[test]
    fn test_routes_to_matching_validator() {
        let Ok(Outcome::Identity(result)) = validate(ValidationType::Nif, "12345678Z") else {
            panic!("NIF request did not produce an identity outcome");
        };
        assert_eq!(result.kind, IdentityKind::Dni);
        assert!(result.is_valid);

        let Ok(Outcome::Iban(result)) = validate(ValidationType::Iban, "ES91 2100 0418 4502 0005 1332")
        else {
            panic!("IBAN request did not produce an IBAN outcome");
        };
        assert!(result.is_valid);

        let Ok(Outcome::Phone { input, result }) = validate(ValidationType::Phone, "912345678") else {
            panic!("Phone request did not produce a phone outcome");
        };
        assert_eq!(input, "912345678");
        assert_eq!(result.category, PhoneCategory::Landline);

        let Ok(Outcome::Email { result, .. }) = validate(ValidationType::Email, "bad-email") else {
            panic!("Email request did not produce an email outcome");
        };
        assert_eq!(result.classification, EmailClassification::InvalidFormat);
    }

    #[test]
    fn test_unrecognised_input_is_invalid_for_every_type() {
        assert!(matches!(
            validate(ValidationType::Nif, "something"),
            Ok(Outcome::Identity(IdentityResult { kind: IdentityKind::Unknown, is_valid: false, .. }))
        ));
        assert!(matches!(
            validate(ValidationType::Iban, "something"),
            Ok(Outcome::Iban(IbanResult { is_valid: false, .. }))
        ));
        assert!(matches!(
            validate(ValidationType::Phone, "something"),
            Ok(Outcome::Phone { result: PhoneResult { is_valid: false, .. }, .. })
        ));
        assert!(matches!(
            validate(ValidationType::Email, "something"),
            Ok(Outcome::Email { result: EmailResult { is_valid: false, .. }, .. })
        ));
    }
}
