use std::io::Write;

use crate::domain::{Error, Event, MenuChoice, Money, Output};

/// Writes the dialogue to a terminal-like writer.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
    currency: String,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W, currency: impl Into<String>) -> Self {
        Self {
            writer,
            currency: currency.into(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn money(&self, amount: rust_decimal::Decimal) -> Money<'_> {
        Money::new(amount, &self.currency)
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn greet(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "🏦 Welcome to the Banking System 🏦")?;
        Ok(())
    }

    fn menu(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "\n===== MENU =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.writer, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), Error> {
        write!(self.writer, "{}: ", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn notify(&mut self, event: &Event) -> Result<(), Error> {
        let line = match event {
            Event::AccountCreated { balance, .. } => format!(
                "✅ Account created successfully with balance {}",
                self.money(*balance)
            ),
            Event::Deposited { amount, balance } => format!(
                "✅ {} deposited successfully. Current Balance: {}",
                self.money(*amount),
                self.money(*balance)
            ),
            Event::Withdrawn { amount, balance } => format!(
                "✅ {} withdrawn successfully. Current Balance: {}",
                self.money(*amount),
                self.money(*balance)
            ),
            Event::BalanceReported { balance } => {
                format!("💰 Current Balance: {}", self.money(*balance))
            }
            Event::SessionClosed => "✅ Thank you for using our banking system!".to_string(),
        };

        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn report(&mut self, error: &Error) -> Result<(), Error> {
        writeln!(self.writer, "❌ {}", error)?;
        Ok(())
    }
}
