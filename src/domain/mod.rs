pub mod account;
pub mod command;
pub mod customer;
pub mod error;
pub mod event;
pub mod money;
pub mod traits;

pub use account::{Account, Operation};
pub use command::{MenuChoice, parse_choice};
pub use customer::Customer;
pub use error::{Error, ParseError};
pub use event::Event;
pub use money::{Money, parse_amount};
pub use traits::{InputSource, Output};
