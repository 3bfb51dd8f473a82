//! SQLite contact store (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use phonebook_core::{Contact, ContactFields, ContactStore, PhonebookError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database behind a `sqlite:` URL or a bare path.
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        if in_memory {
            tracing::warn!("Using an in-memory database, contacts will not survive a restart");
        } else {
            let filename = options.clone().get_filename();
            if let Some(parent) = filename.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory: {}", parent.display())
                    })?;
                }
            }
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // Every connection to `:memory:` is its own database, so keep exactly one alive.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        Self::create_schema(&pool)
            .await
            .context("Failed to create database schema")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn create_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                name TEXT UNIQUE NOT NULL,
                number TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: String,
    name: String,
    number: String,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact::new(r.id, r.name, r.number)
    }
}

/// Ids are UUIDs; anything that does not parse is rejected before querying.
fn parse_id(id: &str) -> phonebook_core::Result<String> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| PhonebookError::MalformedId(id.to_string()))
}

fn storage_error(e: sqlx::Error) -> PhonebookError {
    tracing::error!("Database error: {}", e);
    PhonebookError::Storage(e.to_string())
}

/// Writes that touch `name` can trip its unique index.
fn write_error(e: sqlx::Error, name: &str) -> PhonebookError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return PhonebookError::DuplicateName(name.to_string());
        }
    }
    storage_error(e)
}

#[async_trait]
impl ContactStore for Database {
    async fn list(&self) -> phonebook_core::Result<Vec<Contact>> {
        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
            SELECT id, name, number FROM contacts ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get(&self, id: &str) -> phonebook_core::Result<Option<Contact>> {
        let id = parse_id(id)?;

        let row: Option<ContactRow> = sqlx::query_as(
            r#"
            SELECT id, name, number FROM contacts WHERE id = ?1
            "#,
        )
        .bind(&id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, fields: ContactFields) -> phonebook_core::Result<Contact> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, number)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&id)
        .bind(&fields.name)
        .bind(&fields.number)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &fields.name))?;

        tracing::info!("Created contact {} ({})", id, fields.name);
        Ok(Contact::new(id, fields.name, fields.number))
    }

    async fn update(
        &self,
        id: &str,
        fields: ContactFields,
    ) -> phonebook_core::Result<Option<Contact>> {
        let id = parse_id(id)?;

        let result = sqlx::query(
            r#"
            UPDATE contacts SET name = ?1, number = ?2 WHERE id = ?3
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.number)
        .bind(&id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &fields.name))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tracing::debug!("Updated contact {}", id);
        Ok(Some(Contact::new(id, fields.name, fields.number)))
    }

    async fn delete(&self, id: &str) -> phonebook_core::Result<()> {
        let id = parse_id(id)?;

        sqlx::query(
            r#"
            DELETE FROM contacts WHERE id = ?1
            "#,
        )
        .bind(&id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        tracing::info!("Deleted contact {}", id);
        Ok(())
    }

    async fn count(&self) -> phonebook_core::Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(count as usize)
    }
}
