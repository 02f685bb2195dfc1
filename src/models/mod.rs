//! Domain models and data structures.
//!
//! - `config`: Resolver configuration loading and validation
//! - `security`: Secret tokens, their resolution and error types

mod config;
mod security;

pub use config::{ConfigError, ConfigLoader, ResolverConfig};
pub use security::{
	resolve, resolve_with_encoding, SecretBytes, SecretToken, SecurityError, TextEncoding,
	FILE_SENTINEL,
};
