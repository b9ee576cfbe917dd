use thiserror::Error;

use crate::router::Route;

/// Errors raised by menu operations.
///
/// The validation variants render as the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    /// Dish name, description or price left blank
    #[error("All fields are required.")]
    MissingField,

    /// Price is not a finite number greater than zero
    #[error("Price must be a valid positive number.")]
    InvalidPrice { input: String },

    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition { from: Route, to: Route },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type MenuResult<T> = Result<T, MenuError>;
