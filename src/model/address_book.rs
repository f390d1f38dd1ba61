use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::Record;
use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// Contacts keyed by name, iterated in insertion order.
///
/// Serialises as a list of records. Deserialising goes through
/// [`AddressBook::add_record`], so a repeated name keeps the last record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. An existing record with the same name
    /// is replaced and keeps its position.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name()) {
            Some(index) => {
                debug!(contact = record.name(), "record replaced");
                self.records[index] = record;
            }
            None => {
                debug!(contact = record.name(), "record added");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| BookError::contact_not_found(name))
    }

    /// Removes and returns the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position_of(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        debug!(contact = name, "record deleted");
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate within a week of `reference_date`, in
    /// insertion order. See [`birthday_queries::upcoming_birthdays`].
    pub fn get_upcoming_birthdays(&self, reference_date: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, reference_date)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
