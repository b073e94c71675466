use rust_decimal::Decimal;

use crate::domain::{
    Customer, Error, Event, MenuChoice, ParseError, parse_amount, parse_choice,
    traits::{InputSource, Output},
};

/// Runs one banking session: identity prompts, then the menu loop until exit.
#[derive(Debug)]
pub struct Engine<I, O>
where
    I: InputSource,
    O: Output,
{
    input: I,
    output: O,
}

impl<I, O> Engine<I, O>
where
    I: InputSource,
    O: Output,
{
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Greets and builds the customer, prompting for whatever was not supplied up front.
    pub fn open_session(
        &mut self,
        name: Option<String>,
        customer_id: Option<String>,
    ) -> Result<Customer, Error> {
        self.output.greet()?;

        let name = match name {
            Some(name) => name,
            None => self.ask("Enter your name")?,
        };
        let customer_id = match customer_id {
            Some(id) => id,
            None => self.ask("Enter your Customer ID")?,
        };

        tracing::info!(customer = %customer_id, %name, "session opened");
        Ok(Customer::new(name, customer_id))
    }

    pub fn process(&mut self, customer: &mut Customer) -> Result<(), Error> {
        loop {
            self.output.menu()?;
            let line = self.ask("Enter your choice")?;

            let outcome = parse_choice(&line).and_then(|choice| self.apply_choice(customer, choice));

            match outcome {
                Ok(Event::SessionClosed) => {
                    self.output.notify(&Event::SessionClosed)?;
                    tracing::info!(customer = %customer.customer_id(), name = %customer.name(), "session closed");
                    return Ok(());
                }
                Ok(event) => {
                    tracing::debug!(%event, "request applied");
                    self.output.notify(&event)?;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "request rejected");
                    self.output.report(&e)?;
                }
            }
        }
    }

    fn apply_choice(&mut self, customer: &mut Customer, choice: MenuChoice) -> Result<Event, Error> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(customer),
            MenuChoice::Deposit => self.deposit(customer),
            MenuChoice::Withdraw => self.withdraw(customer),
            MenuChoice::CheckBalance => {
                let balance = customer.require_account()?.check_balance();
                Ok(Event::BalanceReported { balance })
            }
            MenuChoice::Exit => Ok(Event::SessionClosed),
        }
    }

    fn create_account(&mut self, customer: &mut Customer) -> Result<Event, Error> {
        // Both answers are read before the one-account rule is checked.
        let account_number = self.ask("Enter Account Number")?.trim().to_string();
        let initial_balance = self.ask("Enter Initial Balance")?;

        if account_number.is_empty() {
            return Err(ParseError::Empty {
                field: "account number",
            }
            .into());
        }
        let initial_balance = parse_amount(&initial_balance)?;

        let account = customer.create_account(account_number, initial_balance)?;
        Ok(Event::AccountCreated {
            account_number: account.id().to_string(),
            balance: account.check_balance(),
        })
    }

    fn deposit(&mut self, customer: &mut Customer) -> Result<Event, Error> {
        customer.require_account()?;
        let amount = self.ask_amount("Enter amount to deposit")?;

        let balance = customer.require_account_mut()?.deposit(amount)?;
        Ok(Event::Deposited { amount, balance })
    }

    fn withdraw(&mut self, customer: &mut Customer) -> Result<Event, Error> {
        customer.require_account()?;
        let amount = self.ask_amount("Enter amount to withdraw")?;

        let balance = customer.require_account_mut()?.withdraw(amount)?;
        Ok(Event::Withdrawn { amount, balance })
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Error> {
        self.output.prompt(prompt)?;
        self.input.read_line()?.ok_or(Error::InputClosed)
    }

    fn ask_amount(&mut self, prompt: &str) -> Result<Decimal, Error> {
        let line = self.ask(prompt)?;
        Ok(parse_amount(&line)?)
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }
}
