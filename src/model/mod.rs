pub mod record;
pub mod address_book;

// Re-exports for convenience
pub use record::{Phone, Record};
pub use address_book::AddressBook;
