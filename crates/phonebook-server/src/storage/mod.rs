//! Storage layer
//!
//! `MemoryStore` keeps contacts in process memory; `Database` persists them
//! in an embedded SQLite file.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;
