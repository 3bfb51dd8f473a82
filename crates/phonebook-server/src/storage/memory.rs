//! In-memory contact store
//!
//! Contacts live in an ordered list behind an async lock; everything is lost
//! on restart.

use async_trait::async_trait;
use phonebook_core::validation::ensure_unique_name;
use phonebook_core::{Contact, ContactFields, ContactId, ContactStore, Result};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Upper bound (exclusive) for generated ids.
const MAX_ID: u64 = 1_000_000_000_000;

pub struct MemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Store pre-filled with the sample phonebook.
    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1u64, "Arto Hellas", "040-123456"),
        Contact::new(2u64, "Ada Lovelace", "39-44-5323523"),
        Contact::new(3u64, "Dan Abramov", "12-43-234345"),
        Contact::new(4u64, "Mary Poppendieck", "39-23-6423122"),
    ]
}

/// Ids are plain integers here; anything else can never match.
fn parse_id(id: &str) -> Option<ContactId> {
    id.parse::<u64>().ok().map(ContactId::Numeric)
}

fn generate_id(taken: &[Contact]) -> ContactId {
    let mut rng = rand::thread_rng();
    loop {
        let id = ContactId::Numeric(rng.gen_range(0..MAX_ID));
        if !taken.iter().any(|c| c.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, fields: ContactFields) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        ensure_unique_name(&contacts, &fields.name, None)?;

        let contact = Contact {
            id: generate_id(&contacts),
            name: fields.name,
            number: fields.number,
        };
        contacts.push(contact.clone());

        info!("Created contact {} ({})", contact.id, contact.name);
        Ok(contact)
    }

    async fn update(&self, id: &str, fields: ContactFields) -> Result<Option<Contact>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let mut contacts = self.contacts.write().await;
        if !contacts.iter().any(|c| c.id == id) {
            return Ok(None);
        }
        ensure_unique_name(&contacts, &fields.name, Some(&id))?;

        let contact = contacts.iter_mut().find(|c| c.id == id);
        Ok(contact.map(|c| {
            c.name = fields.name;
            c.number = fields.number;
            debug!("Updated contact {}", c.id);
            c.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };

        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);

        if contacts.len() < before {
            info!("Deleted contact {}", id);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.contacts.read().await.len())
    }
}
