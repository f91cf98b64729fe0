//! Result records returned by the validators

use derive_more::Display;
use serde::Serialize;
use strum_macros::EnumIter;

/// What can be validated from the main menu
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    #[display("NIF (DNI, NIE, CIF)")]
    Nif,
    #[display("IBAN")]
    Iban,
    #[display("Teléfono")]
    Phone,
    #[display("Email")]
    Email,
}

impl ValidationType {
    /// Example value shown while the prompt is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            ValidationType::Nif => "DNI, NIE, CIF",
            ValidationType::Iban => "ES91 2100 0418 4502 0005 1332 o ES9121000418450200051332",
            ValidationType::Phone => "+34 612 345 678 o 612 345 678",
            ValidationType::Email => "usuario@dominio.com",
        }
    }

    /// Longest input accepted by the prompt, in characters
    pub fn max_length(&self) -> usize {
        match self {
            ValidationType::Nif => 10,
            ValidationType::Iban => 34,
            ValidationType::Phone => 15,
            ValidationType::Email => 100,
        }
    }
}

/// Kind of identity document recognised by the dispatcher
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IdentityKind {
    #[display("DNI")]
    Dni,
    #[display("NIE")]
    Nie,
    #[display("CIF")]
    Cif,
    #[display("UNKNOWN")]
    Unknown,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IdentityResult {
    pub raw_input: String,
    /// Trimmed and uppercased input, the value actually checked
    pub normalized_id: String,
    pub kind: IdentityKind,
    pub is_valid: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IbanResult {
    pub is_valid: bool,
    /// Input without whitespace or dashes, uppercased
    pub normalized: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PhoneCategory {
    #[display("Móvil")]
    Mobile,
    #[display("Fijo")]
    Landline,
    #[display("Inválido")]
    Invalid,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PhoneResult {
    pub is_valid: bool,
    pub category: PhoneCategory,
    /// First three national digits, only set for valid numbers
    pub prefix: Option<String>,
}

impl PhoneResult {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            category: PhoneCategory::Invalid,
            prefix: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EmailClassification {
    #[display("Formato inválido")]
    InvalidFormat,
    #[display("Proveedor común")]
    CommonProvider,
    #[display("Dominio personalizado")]
    CustomDomain,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EmailResult {
    pub is_valid: bool,
    pub classification: EmailClassification,
    pub domain: Option<String>,
}

impl EmailResult {
    pub fn invalid_format() -> Self {
        Self {
            is_valid: false,
            classification: EmailClassification::InvalidFormat,
            domain: None,
        }
    }
}

/// The result of one validation request, together with what was typed
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Identity(IdentityResult),
    Iban(IbanResult),
    Phone { input: String, result: PhoneResult },
    Email { input: String, result: EmailResult },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        match self {
            Outcome::Identity(result) => result.is_valid,
            Outcome::Iban(result) => result.is_valid,
            Outcome::Phone { result, .. } => result.is_valid,
            Outcome::Email { result, .. } => result.is_valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_menu_order() {
        let types: Vec<ValidationType> = ValidationType::iter().collect();
        assert_eq!(
            types,
            vec![
                ValidationType::Nif,
                ValidationType::Iban,
                ValidationType::Phone,
                ValidationType::Email
            ]
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(IdentityKind::Unknown.to_string(), "UNKNOWN");
        assert_eq!(PhoneCategory::Mobile.to_string(), "Móvil");
        assert_eq!(PhoneCategory::Landline.to_string(), "Fijo");
        assert_eq!(
            EmailClassification::CustomDomain.to_string(),
            "Dominio personalizado"
        );
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = Outcome::Iban(IbanResult {
            is_valid: true,
            normalized: "ES9121000418450200051332".to_string(),
        });

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["type"], "iban");
        assert_eq!(value["is_valid"], true);
    }
}
