//! Application state of the front-end and the text of the result panel.
//!
//! The front-end owns an `AppState`, feeds user actions into it and prints
//! whatever `render` returns. Nothing here reads from the terminal.

use crate::errors::InputError;
use crate::models::{Outcome, ValidationType};
use crate::services;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    validation_type: ValidationType,
    outcome: Option<Outcome>,
}

impl AppState {
    pub fn new(validation_type: ValidationType) -> Self {
        Self {
            validation_type,
            outcome: None,
        }
    }

    pub fn validation_type(&self) -> ValidationType {
        self.validation_type
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Switches to another validation type. The previous result is hidden.
    pub fn select(&mut self, validation_type: ValidationType) {
        self.validation_type = validation_type;
        self.outcome = None;
    }

    /// Validates `input` with the selected type. On error the result panel
    /// is hidden and the error is handed back for display.
    pub fn submit(&mut self, input: &str) -> Result<&Outcome, InputError> {
        match services::validate(self.validation_type, input) {
            Ok(outcome) => Ok(&*self.outcome.insert(outcome)),
            Err(error) => {
                self.outcome = None;
                Err(error)
            }
        }
    }
}

const VALID_TITLE: &str = "✓ Válido";
const INVALID_TITLE: &str = "✕ No válido";

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Identity(result) if result.is_valid => format!(
            "{} es un {} válido\nciudadano español con documento\nreconocido oficialmente",
            result.normalized_id, result.kind
        ),
        Outcome::Identity(result) => format!(
            "{} no es un documento válido\nsegún la normativa española vigente",
            result.normalized_id
        ),

        Outcome::Iban(result) if result.is_valid => format!(
            "{} es un IBAN válido\ncon estructura y checksum correctos",
            result.normalized
        ),
        Outcome::Iban(result) => format!(
            "{} no es un IBAN válido\nverifica la estructura y checksum",
            result.normalized
        ),

        Outcome::Phone { input, result } => match &result.prefix {
            Some(prefix) if result.is_valid => format!(
                "{input} es un número de {}\ncon prefijo {prefix} válido",
                result.category
            ),
            _ => format!("{input} no es un número válido\nverifica el prefijo y formato"),
        },

        Outcome::Email { input, result } if result.is_valid => {
            format!("{input} tiene formato válido\n{}", result.classification)
        }
        Outcome::Email { input, .. } => {
            format!("{input} no tiene formato válido\nverifica el dominio y estructura")
        }
    }
}

/// Text of the result panel, or `None` while no result is shown.
pub fn render(state: &AppState) -> Option<String> {
    let outcome = state.outcome()?;
    let title = if outcome.is_valid() {
        VALID_TITLE
    } else {
        INVALID_TITLE
    };

    Some(format!("{title}\n{}", describe(outcome)))
}
