//! Resolver configuration loading and validation.
//!
//! This module implements the ConfigLoader trait for the resolver
//! configuration, allowing the literal encoding and named secret tokens to be
//! loaded from a JSON file:
//!
//! ```json
//! {
//!   "encoding": "utf8",
//!   "secrets": {
//!     "api_token": "@/run/secrets/api_token",
//!     "username": "deploy-bot"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, collections::HashMap, path::Path};

use crate::models::{
	config::{error::ConfigError, ConfigLoader},
	SecretBytes, SecretToken, SecurityError, TextEncoding,
};

/// Configuration for resolving secret tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
	/// Encoding applied to literal tokens
	#[serde(default)]
	pub encoding: TextEncoding,
	/// Named secret tokens
	#[serde(default)]
	pub secrets: BTreeMap<String, SecretToken>,
}

impl ResolverConfig {
	/// Looks up a named token
	pub fn secret(&self, name: &str) -> Result<&SecretToken, Box<ConfigError>> {
		self.secrets.get(name).ok_or_else(|| {
			Box::new(ConfigError::validation_error(
				format!("Secret '{}' is not defined", name),
				Some(HashMap::from([("secret".to_string(), name.to_string())])),
			))
		})
	}

	/// Resolves a token with the configured encoding
	pub fn resolve(&self, token: &SecretToken) -> Result<SecretBytes, SecurityError> {
		token.resolve(self.encoding)
	}
}

impl ConfigLoader for ResolverConfig {
	/// Load the resolver configuration from a specific file
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>> {
		let metadata = || Some(HashMap::from([("path".to_string(), path.display().to_string())]));

		if !Self::is_json_file(path) {
			return Err(Box::new(ConfigError::file_error(
				"Configuration file must have a .json extension",
				metadata(),
			)));
		}

		let file = std::fs::File::open(path).map_err(|e| {
			ConfigError::file_error_with_source("Failed to open file", e, metadata())
		})?;
		let config: ResolverConfig = serde_json::from_reader(file).map_err(|e| {
			ConfigError::parse_error_with_source("Failed to parse file", e, metadata())
		})?;

		// Validate the config after loading
		config.validate()?;

		tracing::debug!(
			path = %path.display(),
			secrets = config.secrets.len(),
			encoding = %config.encoding,
			"loaded resolver configuration"
		);
		Ok(config)
	}

	/// Validate the resolver configuration
	///
	/// Ensures that:
	/// - Secret names are not empty and contain no whitespace
	/// - File references name a path
	fn validate(&self) -> Result<(), Box<ConfigError>> {
		for (name, token) in &self.secrets {
			if name.is_empty() || name.chars().any(char::is_whitespace) {
				return Err(Box::new(ConfigError::validation_error(
					format!("Invalid secret name '{}'", name),
					None,
				)));
			}

			if let Some(path) = token.file_path() {
				if path.as_os_str().is_empty() {
					return Err(Box::new(ConfigError::validation_error(
						format!("Secret '{}' references an empty file path", name),
						Some(HashMap::from([("secret".to_string(), name.clone())])),
					)));
				}
			}
		}
		Ok(())
	}
}
