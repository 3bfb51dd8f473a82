//! HTTP handlers

pub mod info;
pub mod persons;

pub use info::{info, root};
