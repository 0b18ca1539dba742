//! The address book and its birthday queries.
//!
//! `AddressBook` is an insertion-ordered store of contact records keyed by
//! name. The birthday window computation lives in [`upcoming`] and works on
//! any sequence of records.

pub mod address_book;
pub mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{upcoming_birthdays, weekend_shift, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
