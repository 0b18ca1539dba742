//! Contact service layer.
//!
//! Business logic for adding, editing and querying contacts by name.

use crate::book::{AddressBook, UpcomingBirthday};
use crate::config::Config;
use crate::domain::{BirthdayDate, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Whether `add_contact` created a new contact or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

/// Owns the address book and exposes the operations the CLI dispatches to.
#[derive(Debug, Clone)]
pub struct ContactService {
    book: AddressBook,
    window_days: u32,
}

impl ContactService {
    /// Create a service over an empty address book.
    pub fn new(window_days: u32) -> Self {
        Self {
            book: AddressBook::new(),
            window_days,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.birthday_window_days)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Add a phone to a contact, creating the contact if needed.
    ///
    /// Both the name and the phone are validated before the book is touched,
    /// so a rejected phone never leaves an empty contact behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        let name = Name::new(name).inspect_err(|e| warn!("Rejected name: {}", e))?;
        let phone = PhoneNumber::new(phone).inspect_err(|e| warn!("Rejected phone: {}", e))?;

        if let Some(record) = self.book.find_mut(name.as_str()) {
            debug!("Adding phone {} to existing contact {}", phone, name);
            record.add_phone_number(phone);
            return Ok(AddOutcome::Updated);
        }

        debug!("Creating contact {} with phone {}", name, phone);
        let mut record = ContactRecord::new(name);
        record.add_phone_number(phone);
        self.book.add_record(record);
        Ok(AddOutcome::Created)
    }

    /// Replace the contact's first phone, or add it if the contact has none.
    pub fn change_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        debug!("Changing primary phone of {}", name);
        self.record_mut(name)?.replace_primary_phone(phone)
    }

    /// Replace `old` with `new` on the named contact.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        debug!("Editing phone {} of {}", old, name);
        self.record_mut(name)?.edit_phone(old, new)
    }

    /// Remove a phone from the named contact.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<PhoneNumber> {
        debug!("Removing phone {} from {}", phone, name);
        self.record_mut(name)?.remove_phone(phone)
    }

    /// All phones of the named contact.
    pub fn phones(&self, name: &str) -> BookResult<&[PhoneNumber]> {
        Ok(self.record(name)?.phones())
    }

    /// A specific phone of the named contact, if present.
    pub fn find_phone(&self, name: &str, phone: &str) -> BookResult<Option<&PhoneNumber>> {
        Ok(self.record(name)?.find_phone(phone))
    }

    /// Set or overwrite the birthday of the named contact.
    pub fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<()> {
        debug!("Setting birthday of {}", name);
        self.record_mut(name)?.set_birthday(date)
    }

    /// The birthday of the named contact; `None` when it was never set.
    pub fn birthday(&self, name: &str) -> BookResult<Option<&BirthdayDate>> {
        Ok(self.record(name)?.birthday())
    }

    /// Remove the named contact and return it.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<ContactRecord> {
        debug!("Deleting contact {}", name);
        self.book
            .delete(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.book.records()
    }

    /// Upcoming birthdays relative to `reference` within the configured window.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let upcoming = self
            .book
            .upcoming_birthdays_within(reference, self.window_days);
        debug!(
            "{} upcoming birthdays within {} days of {}",
            upcoming.len(),
            self.window_days,
            reference
        );
        upcoming
    }

    fn record(&self, name: &str) -> BookResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new(crate::book::DEFAULT_WINDOW_DAYS)
    }
}
