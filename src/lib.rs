pub mod error;
pub mod validation;
pub mod model;
pub mod ops;
pub mod queries;
pub mod logging;
pub mod cli;

pub use error::{BookError, BookResult};
pub use model::{AddressBook, Phone, Record};
pub use queries::UpcomingBirthday;
