//! Root module for the validators.
//! Every function here is pure: malformed input yields an invalid result,
//! never an error, except for blank identity input.

mod email;
mod iban;
mod identity;
mod phone;

pub use email::validate_email;
pub use iban::{check_iban, validate_iban};
pub use identity::{validate_cif, validate_dni, validate_identity, validate_nie};
pub use phone::validate_phone;
