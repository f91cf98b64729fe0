//! Email format check and provider classification.
//!
//! This is a minimal syntactic check (something@something.something), not an
//! RFC 5322 parser, and no lookup of the domain is ever made.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{EmailClassification, EmailResult};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Domains reported as a common provider rather than a custom domain
const COMMON_PROVIDERS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
];

pub fn validate_email(email: &str) -> EmailResult {
    if !EMAIL_REGEX.is_match(email) {
        return EmailResult::invalid_format();
    }

    // The regex guarantees exactly one '@'
    let Some((_, domain)) = email.split_once('@') else {
        return EmailResult::invalid_format();
    };
    let domain = domain.to_lowercase();

    let classification = if COMMON_PROVIDERS.contains(&domain.as_str()) {
        EmailClassification::CommonProvider
    } else {
        EmailClassification::CustomDomain
    };

    EmailResult {
        is_valid: true,
        classification,
        domain: Some(domain),
    }
}
