//! Security models
//!
//! This module contains the security models for the application.
//!
//! - `encoding`: Text encodings for literal secret values
//! - `error`: Error types for security operations
//! - `secret`: Secret token parsing, resolution and zeroization

mod encoding;
mod error;
mod secret;

pub use encoding::TextEncoding;
pub use error::SecurityError;
pub use secret::{resolve, resolve_with_encoding, SecretBytes, SecretToken, FILE_SENTINEL};
