use chrono::NaiveDate;

use crate::error::BookResult;
use crate::model::AddressBook;
use crate::validation;

/// Parses `birthday` as `DD.MM.YYYY` and stores it on the named contact,
/// replacing any earlier birthday.
pub fn set_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<NaiveDate> {
    let date = validation::parse_birthday(birthday)?;
    book.find_mut(name.trim())?.add_birthday(date);
    Ok(date)
}

pub fn birthday_of(book: &AddressBook, name: &str) -> BookResult<Option<NaiveDate>> {
    Ok(book.find(name.trim())?.birthday())
}
