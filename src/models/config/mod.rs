//! Configuration loading and validation.
//!
//! This module provides traits and implementations for loading and validating
//! configuration files for the resolver.

use std::path::Path;

mod error;
mod resolver_config;

pub use error::ConfigError;
pub use resolver_config::ResolverConfig;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load configuration from a specific file path
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>>;

	/// Validate the configuration
	///
	/// Returns Ok(()) if valid, or an error message if invalid.
	fn validate(&self) -> Result<(), Box<ConfigError>>;

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
