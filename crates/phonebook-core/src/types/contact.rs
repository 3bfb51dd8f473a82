//! Contact types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored contact.
///
/// The in-memory store hands out integers, the database store opaque string
/// handles. Both serialize as their bare JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Numeric(u64),
    Handle(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Numeric(n) => write!(f, "{}", n),
            ContactId::Handle(h) => f.write_str(h),
        }
    }
}

impl From<u64> for ContactId {
    fn from(n: u64) -> Self {
        ContactId::Numeric(n)
    }
}

impl From<String> for ContactId {
    fn from(h: String) -> Self {
        ContactId::Handle(h)
    }
}

/// A phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Create/update payload as it arrives on the wire.
///
/// Both fields are optional here so that a missing field is reported as a
/// validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_serializes_as_bare_value() {
        let numeric = Contact::new(1u64, "Arto Hellas", "040-123456");
        assert_eq!(
            serde_json::to_value(&numeric).unwrap(),
            json!({"id": 1, "name": "Arto Hellas", "number": "040-123456"})
        );

        let handle = Contact::new(
            "0b7e4c1e-4d6b-4a8e-9d3c-0d1f2a3b4c5d".to_string(),
            "Ada Lovelace",
            "39-44-5323523",
        );
        assert_eq!(
            serde_json::to_value(&handle).unwrap()["id"],
            json!("0b7e4c1e-4d6b-4a8e-9d3c-0d1f2a3b4c5d")
        );
    }

    #[test]
    fn test_new_contact_tolerates_missing_fields() {
        let payload: NewContact = serde_json::from_str(r#"{"name":"Dan Abramov"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Dan Abramov"));
        assert!(payload.number.is_none());
    }
}
