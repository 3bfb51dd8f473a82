//! Domain types

pub mod contact;

pub use contact::*;
