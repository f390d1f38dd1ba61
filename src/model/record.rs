use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::validation::date_format;

/// A single phone number attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone {
    pub value: String,
}

impl Phone {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// One contact: a fixed name, its phone numbers and an optional birthday.
///
/// The name doubles as the key in an [`AddressBook`](super::AddressBook), so
/// it cannot be changed once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    #[serde(default, with = "date_format::optional")]
    birthday: Option<NaiveDate>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, value: &str) {
        self.phones.push(Phone::new(value));
    }

    /// Removes the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<()> {
        let index = self
            .position_of(value)
            .ok_or_else(|| BookError::phone_not_found(value))?;
        self.phones.remove(index);
        debug!(contact = %self.name, phone = value, "phone removed");
        Ok(())
    }

    /// Replaces the first phone equal to `old_value` in place.
    /// Does nothing when `old_value` is not on the record.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) {
        if let Some(index) = self.position_of(old_value) {
            self.phones[index].value = new_value.to_string();
        }
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value == value)
    }

    pub fn add_birthday(&mut self, birthday: NaiveDate) {
        self.birthday = Some(birthday);
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.value.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
