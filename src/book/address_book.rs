//! Insertion-ordered address book.

use super::upcoming::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-memory collection of contacts keyed uniquely by name.
///
/// Records are listed in the order their names were first added. Replacing
/// a record keeps its original position; deleting one closes the gap.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced entirely (no merge)
    /// and returned.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        match self.index.get(&key).copied() {
            Some(position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index
            .get(name.trim())
            .map(|&position| &self.records[position])
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(name.trim()) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let position = self.index.remove(name.trim())?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Iterate over all records in insertion order.
    pub fn records(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next seven days of `reference`.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose birthday falls within `window_days` days of `reference`.
    pub fn upcoming_birthdays_within(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.records(), reference, window_days)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> ContactRecord {
        let mut r = ContactRecord::with_name(name).unwrap();
        for phone in phones {
            r.add_phone(phone).unwrap();
        }
        r
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.records().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.records().count(), 0);
        assert!(book.find("Ann").is_none());
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Ann", &["0991234567"])).is_none());

        let found = book.find("Ann").unwrap();
        assert_eq!(found.name().as_str(), "Ann");
        assert!(book.contains("Ann"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0991234567"]));
        assert_eq!(book.find("Ann"), book.find("Ann"));
        assert_eq!(book.find("Bob"), book.find("Bob"));
    }

    #[test]
    fn test_find_trims_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[]));
        assert!(book.find(" Ann ").is_some());
    }

    #[test]
    fn test_overwrite_replaces_without_merge() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["1111111111"]));
        book.add_record(record("Bob", &[]));

        let previous = book.add_record(record("Ann", &["2222222222"])).unwrap();
        assert_eq!(previous.phones()[0].as_str(), "1111111111");

        let ann = book.find("Ann").unwrap();
        assert_eq!(ann.phones().len(), 1);
        assert_eq!(ann.phones()[0].as_str(), "2222222222");
        assert_eq!(names(&book), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut book = AddressBook::new();
        for name in ["Carol", "Ann", "Bob"] {
            book.add_record(record(name, &[]));
        }
        assert_eq!(names(&book), vec!["Carol", "Ann", "Bob"]);
        assert_eq!(names(&book), vec!["Carol", "Ann", "Bob"]);
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let mut book = AddressBook::new();
        for name in ["Ann", "Bob", "Carol", "Dave"] {
            book.add_record(record(name, &[]));
        }

        let removed = book.delete("Bob").unwrap();
        assert_eq!(removed.name().as_str(), "Bob");
        assert_eq!(names(&book), vec!["Ann", "Carol", "Dave"]);

        // Index must still point at the right records after the shift.
        assert_eq!(book.find("Dave").unwrap().name().as_str(), "Dave");
        assert_eq!(book.find("Carol").unwrap().name().as_str(), "Carol");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[]));
        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[]));

        book.find_mut("Ann").unwrap().add_phone("0991234567").unwrap();
        assert!(book.find("Ann").unwrap().find_phone("0991234567").is_some());
        assert!(book.find_mut("Bob").is_none());
    }

    #[test]
    fn test_readd_after_delete_goes_to_end() {
        let mut book = AddressBook::new();
        for name in ["Ann", "Bob"] {
            book.add_record(record(name, &[]));
        }
        book.delete("Ann");
        book.add_record(record("Ann", &[]));
        assert_eq!(names(&book), vec!["Bob", "Ann"]);
    }
}
