//! Storage trait for contacts

use crate::{Contact, ContactFields, Result};
use async_trait::async_trait;

/// Contact store
///
/// `id` arguments are the raw path segment from the request. Each store
/// decides how to parse it: an id that can never match is reported either as
/// "absent" or as [`PhonebookError::MalformedId`](crate::PhonebookError::MalformedId).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts in storage order.
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    async fn create(&self, fields: ContactFields) -> Result<Contact>;
    async fn update(&self, id: &str, fields: ContactFields) -> Result<Option<Contact>>;
    /// Removing an absent contact is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
    async fn count(&self) -> Result<usize>;
}
