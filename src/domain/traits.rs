use crate::domain::{Error, Event};

/// Line-based source of answers for the session loop.
pub trait InputSource {
    /// `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, Error>;
}

pub trait Output {
    fn greet(&mut self) -> Result<(), Error>;

    fn menu(&mut self) -> Result<(), Error>;

    fn prompt(&mut self, text: &str) -> Result<(), Error>;

    fn notify(&mut self, event: &Event) -> Result<(), Error>;

    fn report(&mut self, error: &Error) -> Result<(), Error>;
}
