//! Configuration error types.
//!
//! This module defines the error types that can occur during configuration
//! loading and validation.

use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	ValidationError(ErrorContext),

	/// Failed to parse configuration file
	ParseError(ErrorContext),

	/// File system error during configuration loading
	FileError(ErrorContext),
}

impl ConfigError {
	fn log(self) -> Self {
		tracing::debug!(error = %self, "configuration error");
		self
	}

	/// Create a new validation error with logging
	pub fn validation_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new(msg, None, metadata)).log()
	}

	/// Create a new parse error with logging
	pub fn parse_error(msg: impl Into<String>, metadata: Option<HashMap<String, String>>) -> Self {
		Self::ParseError(ErrorContext::new(msg, None, metadata)).log()
	}

	/// Create a new parse error with source
	pub fn parse_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(ErrorContext::new(msg, Some(Box::new(source)), metadata)).log()
	}

	/// Create a new file error with logging
	pub fn file_error(msg: impl Into<String>, metadata: Option<HashMap<String, String>>) -> Self {
		Self::FileError(ErrorContext::new(msg, None, metadata)).log()
	}

	/// Create a new file error with source
	pub fn file_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::FileError(ErrorContext::new(msg, Some(Box::new(source)), metadata)).log()
	}

	fn context(&self) -> &ErrorContext {
		match self {
			Self::ValidationError(ctx) => ctx,
			Self::ParseError(ctx) => ctx,
			Self::FileError(ctx) => ctx,
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.context().source_error()
	}
}

// Standard error trait implementations
impl std::fmt::Display for ConfigError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ValidationError(ctx) => write!(f, "Validation Error: {}", ctx),
			Self::ParseError(ctx) => write!(f, "Parse Error: {}", ctx),
			Self::FileError(ctx) => write!(f, "File Error: {}", ctx),
		}
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error_with_source(err.to_string(), err, None)
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error_with_source(err.to_string(), err, None)
	}
}
