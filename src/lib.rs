//! Validation of Spanish identity documents (DNI, NIE, CIF), IBAN account
//! numbers, phone numbers and email addresses.

pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;
pub mod validation;
