//! Contact record representing a person in the address book.

use crate::domain::{BirthdayDate, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// A contact: a fixed name, an ordered list of phone numbers and an
/// optional birthday.
///
/// All mutators validate their input before touching the record, so a
/// rejected call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    /// Name of the contact, also its key in the address book
    name: Name,

    /// Phone numbers in the order they were added (duplicates allowed)
    phones: Vec<PhoneNumber>,

    /// Birthday, if one has been set
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a new record with a name and nothing else.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank.
    pub fn with_name(name: &str) -> BookResult<Self> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(value)?;
        self.add_phone_number(phone);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn add_phone_number(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with the validated `new`.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if `old` is not on the record, otherwise a validation
    /// error if `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        let phone = PhoneNumber::new(new)?;
        self.phones[index] = phone;
        Ok(())
    }

    /// Replace the primary (first) phone, or add one if the record has none.
    pub fn replace_primary_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(value)?;
        match self.phones.first_mut() {
            Some(primary) => *primary = phone,
            None => self.phones.push(phone),
        }
        Ok(())
    }

    /// Remove the first phone equal to `value` and return it.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<PhoneNumber> {
        let index = self.position_of(value)?;
        Ok(self.phones.remove(index))
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == value)
    }

    /// Validate and store the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(BirthdayDate::new(value)?);
        Ok(())
    }

    fn position_of(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
