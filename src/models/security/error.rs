//! Security error types.
//!
//! Errors raised while resolving secret tokens. Constructors log the error at
//! debug level when they are created; the caller decides how failures are
//! reported. Messages and metadata never include secret values.

use std::{collections::HashMap, error::Error, fmt, io};

use crate::utils::{BoxedSource, ErrorContext};

/// Errors that can occur while resolving a secret
#[derive(Debug)]
pub enum SecurityError {
	/// A referenced secret file could not be read
	///
	/// Examples include:
	/// - The file does not exist
	/// - Permission denied
	/// - The path is a directory
	FileAccessError(ErrorContext),

	/// A value could not be converted between text and bytes
	///
	/// Examples include:
	/// - A literal contains characters outside the selected encoding
	/// - Resolved bytes are not valid UTF-8 when read as text
	EncodingError(ErrorContext),
}

impl SecurityError {
	/// Creates a new file access error with logging
	pub fn file_access_error(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let error = Self::FileAccessError(ErrorContext::new(msg, source, metadata));
		tracing::debug!(error = %error, "secret file access failed");
		error
	}

	/// Creates a new encoding error with logging
	pub fn encoding_error(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		let error = Self::EncodingError(ErrorContext::new(msg, source, metadata));
		tracing::debug!(error = %error, "secret encoding failed");
		error
	}

	/// Returns the underlying error context
	pub fn context(&self) -> &ErrorContext {
		match self {
			Self::FileAccessError(ctx) => ctx,
			Self::EncodingError(ctx) => ctx,
		}
	}

	/// Returns the kind of the I/O error behind a file access error
	pub fn io_error_kind(&self) -> Option<io::ErrorKind> {
		match self {
			Self::FileAccessError(ctx) => ctx
				.source
				.as_ref()
				.and_then(|source| source.downcast_ref::<io::Error>())
				.map(io::Error::kind),
			Self::EncodingError(_) => None,
		}
	}

	/// Checks whether this is a file access error
	pub fn is_file_access_error(&self) -> bool {
		matches!(self, Self::FileAccessError(_))
	}

	/// Checks whether this is an encoding error
	pub fn is_encoding_error(&self) -> bool {
		matches!(self, Self::EncodingError(_))
	}
}

impl Error for SecurityError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.context().source_error()
	}
}

impl fmt::Display for SecurityError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FileAccessError(ctx) => write!(f, "File access error: {}", ctx),
			Self::EncodingError(ctx) => write!(f, "Encoding error: {}", ctx),
		}
	}
}
