pub mod contact_ops;
pub mod birthday_ops;
