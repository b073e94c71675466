use rust_decimal::Decimal;

use crate::domain::Operation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{operation} amount must be greater than zero.")]
    InvalidAmount { operation: Operation },

    #[error("Insufficient balance! Transaction declined. Requested {requested}, available {available}.")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("You already have an account ({account_number}).")]
    AccountAlreadyExists { account_number: String },

    #[error("{operation} of {amount} would exceed the largest supported balance.")]
    AmountTooLarge { operation: Operation, amount: Decimal },

    #[error("Please create an account first.")]
    NoAccount,

    #[error("Invalid choice {0}. Please try again.")]
    InvalidChoice(i64),

    #[error("Input ended before the session was closed")]
    InputClosed,
}

impl Error {
    /// Fatal errors end the session; everything else is reported and the loop goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::IO(_) | Error::InputClosed)
    }
}

/// Malformed console input, kept apart from the account's validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing {field}.")]
    Empty { field: &'static str },

    #[error("'{input}' is not a valid {field}.")]
    NotANumber { field: &'static str, input: String },
}
