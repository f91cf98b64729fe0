use std::iter;

use anyhow::Result;
use derive_more::Display;
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use validador::config::Config;
use validador::models::ValidationType;
use validador::render::{render, AppState};

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns `None` when the menu should stop,
    /// `Some(())` when it should be shown again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it stops, printing errors along the way.
    /// Ctrl-C stops the loop.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if matches!(
                    error.downcast_ref::<InquireError>(),
                    Some(InquireError::OperationInterrupted)
                ) {
                    break;
                }
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App {
    state: AppState,
}

impl App {
    fn new() -> Self {
        App {
            state: AppState::new(ValidationType::Nif),
        }
    }

    fn start(&mut self) {
        println!("Validador de NIF, IBAN, teléfonos y emails.");
        self.enter_loop();
    }
}

#[derive(Display)]
enum Choice {
    #[display("{_0}")]
    Validate(ValidationType),
    #[display("Salir")]
    Exit,
}

fn read_value(validation_type: ValidationType) -> Result<String> {
    let max_length = validation_type.max_length();
    let message = format!("{validation_type}:");

    let value = Text::new(&message)
        .with_placeholder(validation_type.placeholder())
        .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
            if input.chars().count() > max_length {
                Ok(Validation::Invalid(
                    format!("Máximo {max_length} caracteres").into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;

    Ok(value)
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        let choices: Vec<Choice> = ValidationType::iter()
            .map(Choice::Validate)
            .chain(iter::once(Choice::Exit))
            .collect();

        let Some(choice) = Select::new("¿Qué quieres validar?", choices).prompt_skippable()? else {
            return Ok(MENU_EXIT);
        };

        let validation_type = match choice {
            Choice::Validate(validation_type) => validation_type,
            Choice::Exit => return Ok(MENU_EXIT),
        };

        if validation_type != self.state.validation_type() {
            self.state.select(validation_type);
        }

        let value = read_value(validation_type)?;
        self.state.submit(&value)?;

        if let Some(panel) = render(&self.state) {
            println!("\n{panel}\n");
        }

        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    let config = Config::load()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Logging to {}", config.log_file.display());

    App::new().start();
    Ok(())
}
