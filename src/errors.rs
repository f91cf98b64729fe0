//! Errors surfaced to the user

use thiserror::Error;

pub const EMPTY_IDENTITY_MESSAGE: &str = "Por favor, introduce un número de identificación";

pub const EMPTY_VALUE_MESSAGE: &str = "Por favor, introduce un valor para validar";

/// Rejected input. Only blank input is an error, malformed values are
/// reported as invalid results instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{}", EMPTY_IDENTITY_MESSAGE)]
    EmptyIdentity,

    #[error("{}", EMPTY_VALUE_MESSAGE)]
    EmptyValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(InputError::EmptyIdentity.to_string(), EMPTY_IDENTITY_MESSAGE);
        assert_eq!(InputError::EmptyValue.to_string(), EMPTY_VALUE_MESSAGE);
    }
}
