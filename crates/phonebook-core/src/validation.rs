//! Input validation for contact payloads

use crate::{Contact, ContactFields, ContactId, NewContact, PhonebookError, Result};

/// Message returned when a name is already taken in the in-memory store.
pub const NAME_NOT_UNIQUE: &str = "name must be unique";

/// Check that both fields are present and non-empty.
pub fn validate(payload: NewContact) -> Result<ContactFields> {
    match (payload.name, payload.number) {
        (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => {
            Ok(ContactFields { name, number })
        }
        _ => Err(PhonebookError::MissingField),
    }
}

/// Reject `name` if any contact other than `except` already uses it.
pub fn ensure_unique_name(
    contacts: &[Contact],
    name: &str,
    except: Option<&ContactId>,
) -> Result<()> {
    let taken = contacts
        .iter()
        .any(|c| c.name == name && Some(&c.id) != except);

    if taken {
        Err(PhonebookError::Validation(NAME_NOT_UNIQUE.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, number: Option<&str>) -> NewContact {
        NewContact {
            name: name.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        let fields = validate(payload(Some("Arto Hellas"), Some("040-123456"))).unwrap();
        assert_eq!(fields.name, "Arto Hellas");
        assert_eq!(fields.number, "040-123456");
    }

    #[test]
    fn test_validate_rejects_missing_or_empty() {
        for p in [
            payload(None, Some("040-123456")),
            payload(Some("Arto Hellas"), None),
            payload(Some(""), Some("040-123456")),
            payload(Some("Arto Hellas"), Some("")),
            payload(None, None),
        ] {
            assert_eq!(validate(p), Err(PhonebookError::MissingField));
        }
    }

    #[test]
    fn test_unique_name() {
        let contacts = vec![
            Contact::new(1u64, "Arto Hellas", "040-123456"),
            Contact::new(2u64, "Ada Lovelace", "39-44-5323523"),
        ];

        assert!(ensure_unique_name(&contacts, "Dan Abramov", None).is_ok());

        let err = ensure_unique_name(&contacts, "Ada Lovelace", None).unwrap_err();
        assert_eq!(err.to_string(), NAME_NOT_UNIQUE);

        // Renaming a contact to its own name is fine
        let own = ContactId::Numeric(2);
        assert!(ensure_unique_name(&contacts, "Ada Lovelace", Some(&own)).is_ok());
    }
}
