//! Cross-cutting request/response handling

pub mod access_log;
pub mod errors;

pub use access_log::access_log;
pub use errors::{unknown_endpoint, ApiError};
