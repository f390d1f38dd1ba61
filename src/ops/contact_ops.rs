use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};
use crate::validation;

/// Adds `phone` to the contact called `name`, creating the contact first if
/// the book does not have it. Returns `true` when a new contact was created.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<bool> {
    let valid_name = validation::non_blank(name, "name")?;
    let valid_phone = validation::non_blank(phone, "phone")?;

    let created = !book.contains(&valid_name);
    if created {
        book.add_record(Record::new(valid_name.clone()));
    }

    book.find_mut(&valid_name)?.add_phone(&valid_phone);
    debug!(contact = %valid_name, created, "phone added");
    Ok(created)
}

/// Replaces `old_phone` with `new_phone` on the named contact.
///
/// Unlike [`Record::edit_phone`], a missing old phone is reported so the
/// caller can tell the user nothing changed.
pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<()> {
    let valid_new = validation::non_blank(new_phone, "phone")?;
    let record = book.find_mut(name.trim())?;
    let old_phone = old_phone.trim();

    if record.find_phone(old_phone).is_none() {
        return Err(BookError::phone_not_found(old_phone));
    }
    record.edit_phone(old_phone, &valid_new);
    Ok(())
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<()> {
    book.find_mut(name.trim())?.remove_phone(phone.trim())
}

pub fn phones_of(book: &AddressBook, name: &str) -> BookResult<Vec<String>> {
    let record = book.find(name.trim())?;
    Ok(record.phones().iter().map(|p| p.value.clone()).collect())
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> BookResult<Record> {
    book.delete(name.trim())
}
