use rust_decimal::Decimal;

use crate::domain::Error;

/// Balance-changing operations, named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit => write!(f, "Deposit"),
            Operation::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: String,
    balance: Decimal,
}

impl Account {
    /// The initial balance is taken as given, negative values included.
    pub fn new(id: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: initial_balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Adds `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount {
                operation: Operation::Deposit,
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountTooLarge {
                operation: Operation::Deposit,
                amount,
            })?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");
        Ok(self.balance)
    }

    /// Removes `amount` and returns the new balance. Never leaves the balance below zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount {
                operation: Operation::Withdrawal,
            });
        }

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");
        Ok(self.balance)
    }

    pub fn check_balance(&self) -> Decimal {
        self.balance
    }
}
