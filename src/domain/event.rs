use rust_decimal::Decimal;

/// Outcome of a successful session step, handed to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AccountCreated {
        account_number: String,
        balance: Decimal,
    },
    Deposited {
        amount: Decimal,
        balance: Decimal,
    },
    Withdrawn {
        amount: Decimal,
        balance: Decimal,
    },
    BalanceReported {
        balance: Decimal,
    },
    SessionClosed,
}

impl core::fmt::Display for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Event::AccountCreated {
                account_number,
                balance,
            } => write!(f, "AccountCreated,account={},balance={}", account_number, balance),
            Event::Deposited { amount, balance } | Event::Withdrawn { amount, balance } => {
                let kind = if matches!(self, Event::Deposited { .. }) {
                    "Deposited"
                } else {
                    "Withdrawn"
                };
                write!(f, "{},amount={},balance={}", kind, amount, balance)
            }
            Event::BalanceReported { balance } => write!(f, "BalanceReported,balance={}", balance),
            Event::SessionClosed => write!(f, "SessionClosed"),
        }
    }
}
