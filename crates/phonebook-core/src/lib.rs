//! Phonebook Core Library
//!
//! Domain types, validation rules, and the storage port shared by every
//! phonebook deployment.

pub mod error;
pub mod ports;
pub mod types;
pub mod validation;

pub use error::{PhonebookError, Result};
pub use ports::ContactStore;
pub use types::*;
