//! Ports (traits) implemented by storage adapters

pub mod storage;

pub use storage::ContactStore;
