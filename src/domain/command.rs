use crate::domain::{Error, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> i64 {
        match self {
            MenuChoice::CreateAccount => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::CheckBalance => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(Error::InvalidChoice(value))
    }
}

/// Non-numbers are parse errors; numbers off the menu are `InvalidChoice`.
pub fn parse_choice(input: &str) -> Result<MenuChoice, Error> {
    let s = input.trim();

    if s.is_empty() {
        return Err(ParseError::Empty { field: "choice" }.into());
    }

    let value: i64 = s.parse().map_err(|_| ParseError::NotANumber {
        field: "choice",
        input: s.to_string(),
    })?;

    MenuChoice::try_from(value)
}
