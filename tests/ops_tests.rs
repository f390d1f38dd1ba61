use address_book::model::AddressBook;
use address_book::ops::{birthday_ops, contact_ops};
use address_book::BookError;
use chrono::NaiveDate;

fn setup() -> AddressBook {
    let mut book = AddressBook::new();
    contact_ops::add_contact(&mut book, "John", "1234567890").unwrap();
    contact_ops::add_contact(&mut book, "John", "5555555555").unwrap();
    book
}

// ==========================================================================
// CONTACT OPS
// ==========================================================================

#[test]
fn add_contact_creates_then_appends() {
    let mut book = AddressBook::new();
    assert!(contact_ops::add_contact(&mut book, "John", "111").unwrap());
    assert!(!contact_ops::add_contact(&mut book, "John", "222").unwrap());

    assert_eq!(book.len(), 1);
    assert_eq!(contact_ops::phones_of(&book, "John").unwrap(), vec!["111", "222"]);
}

#[test]
fn add_contact_trims_input() {
    let mut book = AddressBook::new();
    contact_ops::add_contact(&mut book, "  Jane ", " 987 ").unwrap();
    assert!(book.find("Jane").unwrap().find_phone("987").is_some());
}

#[test]
fn add_contact_rejects_blank_name() {
    let mut book = AddressBook::new();
    let err = contact_ops::add_contact(&mut book, "   ", "111").unwrap_err();
    assert!(matches!(err, BookError::BlankField { .. }));
    assert!(book.is_empty());
}

#[test]
fn add_contact_rejects_blank_phone() {
    let mut book = AddressBook::new();
    assert!(contact_ops::add_contact(&mut book, "John", "").is_err());
    assert!(book.is_empty());
}

#[test]
fn change_phone_updates_in_place() {
    let mut book = setup();
    contact_ops::change_phone(&mut book, "John", "1234567890", "1112223333").unwrap();
    assert_eq!(
        contact_ops::phones_of(&book, "John").unwrap(),
        vec!["1112223333", "5555555555"]
    );
}

#[test]
fn change_phone_reports_missing_old_phone() {
    let mut book = setup();
    let err = contact_ops::change_phone(&mut book, "John", "000", "111").unwrap_err();
    assert_eq!(err.to_string(), "Phone not found: 000");
}

#[test]
fn change_phone_unknown_contact() {
    let mut book = setup();
    let err = contact_ops::change_phone(&mut book, "Jane", "000", "111").unwrap_err();
    assert_eq!(err.to_string(), "Contact not found: Jane");
}

#[test]
fn remove_phone_removes_and_reports_missing() {
    let mut book = setup();
    contact_ops::remove_phone(&mut book, "John", "5555555555").unwrap();
    assert_eq!(contact_ops::phones_of(&book, "John").unwrap(), vec!["1234567890"]);

    assert!(matches!(
        contact_ops::remove_phone(&mut book, "John", "5555555555"),
        Err(BookError::NotFound { .. })
    ));
}

#[test]
fn phones_of_unknown_contact() {
    let book = setup();
    assert!(contact_ops::phones_of(&book, "Nobody").is_err());
}

#[test]
fn delete_contact_returns_removed_record() {
    let mut book = setup();
    let removed = contact_ops::delete_contact(&mut book, "John").unwrap();
    assert_eq!(removed.phones().len(), 2);
    assert!(book.is_empty());
    assert!(contact_ops::delete_contact(&mut book, "John").is_err());
}

// ==========================================================================
// BIRTHDAY OPS
// ==========================================================================

#[test]
fn set_birthday_parses_and_stores() {
    let mut book = setup();
    let date = birthday_ops::set_birthday(&mut book, "John", "15.06.1990").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    assert_eq!(birthday_ops::birthday_of(&book, "John").unwrap(), Some(date));
}

#[test]
fn set_birthday_rejects_bad_format() {
    let mut book = setup();
    let err = birthday_ops::set_birthday(&mut book, "John", "1990-06-15").unwrap_err();
    assert!(matches!(err, BookError::InvalidDate { .. }));
    assert_eq!(birthday_ops::birthday_of(&book, "John").unwrap(), None);
}

#[test]
fn set_birthday_unknown_contact() {
    let mut book = setup();
    assert!(matches!(
        birthday_ops::set_birthday(&mut book, "Jane", "15.06.1990"),
        Err(BookError::NotFound { .. })
    ));
}

#[test]
fn birthday_set_through_ops_feeds_upcoming_query() {
    let mut book = setup();
    birthday_ops::set_birthday(&mut book, "John", "15.06.1990").unwrap();

    let upcoming = book.get_upcoming_birthdays(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
}
