//! Server configuration from command-line flags and environment

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Where contacts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// Process memory, seeded with sample contacts
    Memory,
    /// Embedded SQLite database
    Sqlite,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "phonebook-server")]
#[command(version, about = "Phonebook REST API", long_about = None)]
pub struct Config {
    /// Storage backend
    #[arg(long, env = "PHONEBOOK_STORAGE", value_enum, default_value_t = StorageKind::Memory)]
    pub storage: StorageKind,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// SQLite URL or file path (sqlite storage only)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://phonebook.db")]
    pub database_url: String,

    /// Prebuilt frontend bundle (sqlite storage only)
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
