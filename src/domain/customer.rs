use rust_decimal::Decimal;

use crate::domain::{Account, Error};

/// The session's user. Holds at most one account, and keeps it once created.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    customer_id: String,
    account: Option<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customer_id: customer_id.into(),
            account: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn create_account(
        &mut self,
        account_number: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<&Account, Error> {
        if let Some(existing) = &self.account {
            return Err(Error::AccountAlreadyExists {
                account_number: existing.id().to_string(),
            });
        }

        let account_number = account_number.into();
        if initial_balance <= Decimal::ZERO {
            // Opening balances are not validated, unlike deposits and withdrawals.
            tracing::warn!(account = %account_number, %initial_balance, "account opened with a non-positive balance");
        }
        tracing::info!(customer = %self.customer_id, account = %account_number, "account created");

        Ok(&*self
            .account
            .insert(Account::new(account_number, initial_balance)))
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn account_mut(&mut self) -> Option<&mut Account> {
        self.account.as_mut()
    }

    pub fn require_account(&self) -> Result<&Account, Error> {
        self.account().ok_or(Error::NoAccount)
    }

    pub fn require_account_mut(&mut self) -> Result<&mut Account, Error> {
        self.account_mut().ok_or(Error::NoAccount)
    }
}
