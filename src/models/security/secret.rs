//! Secret token resolution.
//!
//! A secret token is the raw string a user puts on the command line or in a
//! config file. It is either the secret itself or, when it starts with `@`,
//! a reference to a file holding the secret:
//!
//! ```
//! use secret_token::models::{resolve, SecretToken};
//!
//! assert_eq!(resolve("value").unwrap().as_bytes(), b"value");
//!
//! let token: SecretToken = "@/run/secrets/api_token".parse().unwrap();
//! assert!(token.is_file_reference());
//! ```
//!
//! Resolution has no retained state: literals are encoded, file references
//! are read in full on every call. Both token and resolved bytes are zeroized
//! when dropped.

use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::{
	collections::HashMap,
	convert::Infallible,
	fmt, io,
	path::{Path, PathBuf},
	str::FromStr,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::models::security::{encoding::TextEncoding, error::SecurityError};

/// Leading character that marks a file reference
pub const FILE_SENTINEL: char = '@';

/// A secret as supplied by a user, before resolution
#[derive(Clone, PartialEq, Eq)]
pub enum SecretToken {
	/// The token is the secret value
	Literal(String),
	/// The secret is the full content of the file at this path
	File(PathBuf),
}

impl SecretToken {
	/// Classifies `token` as a literal or a file reference.
	///
	/// Everything after a leading `@` is taken verbatim as the path. There is
	/// no escape for literals that begin with `@`.
	pub fn parse(token: &str) -> Self {
		match token.strip_prefix(FILE_SENTINEL) {
			Some(path) => SecretToken::File(PathBuf::from(path)),
			None => SecretToken::Literal(token.to_string()),
		}
	}

	/// Checks if the token references a file
	pub fn is_file_reference(&self) -> bool {
		matches!(self, SecretToken::File(_))
	}

	/// Returns the referenced path for file tokens
	pub fn file_path(&self) -> Option<&Path> {
		match self {
			SecretToken::File(path) => Some(path),
			SecretToken::Literal(_) => None,
		}
	}

	/// Resolves the token into secret bytes.
	///
	/// - For `Literal`, encodes the value with `encoding`
	/// - For `File`, reads the whole file; `encoding` does not apply
	///
	/// # Errors
	///
	/// Returns a `SecurityError` if:
	/// - The referenced file cannot be read (file access error)
	/// - The literal cannot be represented in `encoding` (encoding error)
	pub fn resolve(&self, encoding: TextEncoding) -> Result<SecretBytes, SecurityError> {
		match self {
			SecretToken::Literal(value) => Self::resolve_literal(value, encoding),
			SecretToken::File(path) => {
				tracing::debug!(path = %path.display(), "reading secret file");
				std::fs::read(path)
					.map(SecretBytes::new)
					.map_err(|e| file_access_error(path, e))
			}
		}
	}

	/// Resolves the token like [`SecretToken::resolve`], reading files through
	/// `tokio::fs` so async callers are not blocked.
	pub async fn resolve_async(&self, encoding: TextEncoding) -> Result<SecretBytes, SecurityError> {
		match self {
			SecretToken::Literal(value) => Self::resolve_literal(value, encoding),
			SecretToken::File(path) => {
				tracing::debug!(path = %path.display(), "reading secret file");
				tokio::fs::read(path)
					.await
					.map(SecretBytes::new)
					.map_err(|e| file_access_error(path, e))
			}
		}
	}

	fn resolve_literal(value: &str, encoding: TextEncoding) -> Result<SecretBytes, SecurityError> {
		tracing::debug!(%encoding, "encoding literal secret");
		encoding.encode(value).map(SecretBytes::new)
	}
}

fn file_access_error(path: &Path, error: io::Error) -> SecurityError {
	SecurityError::file_access_error(
		format!("Failed to read secret file: {}", error.kind()),
		Some(Box::new(error)),
		Some(HashMap::from([(
			"path".to_string(),
			path.display().to_string(),
		)])),
	)
}

/// Resolves `token` with UTF-8 as the literal encoding.
///
/// `resolve("value")` returns `b"value"`; `resolve("@/path/to/file")` returns
/// the bytes of that file.
pub fn resolve(token: &str) -> Result<SecretBytes, SecurityError> {
	resolve_with_encoding(token, TextEncoding::Utf8)
}

/// Resolves `token` with the given literal encoding
pub fn resolve_with_encoding(
	token: &str,
	encoding: TextEncoding,
) -> Result<SecretBytes, SecurityError> {
	SecretToken::parse(token).resolve(encoding)
}

impl FromStr for SecretToken {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl From<&str> for SecretToken {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

impl fmt::Debug for SecretToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SecretToken::Literal(_) => f.write_str("Literal(<redacted>)"),
			SecretToken::File(path) => f.debug_tuple("File").field(path).finish(),
		}
	}
}

impl Serialize for SecretToken {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			SecretToken::Literal(value) => serializer.serialize_str(value),
			// Non-UTF-8 paths have no token string form
			SecretToken::File(path) => {
				let path = path.to_str().ok_or_else(|| {
					S::Error::custom("file reference path is not valid UTF-8")
				})?;
				serializer.collect_str(&format_args!("{}{}", FILE_SENTINEL, path))
			}
		}
	}
}

impl<'de> Deserialize<'de> for SecretToken {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let mut raw = String::deserialize(deserializer)?;
		let token = Self::parse(&raw);
		raw.zeroize();
		Ok(token)
	}
}

impl Zeroize for SecretToken {
	fn zeroize(&mut self) {
		match self {
			SecretToken::Literal(value) => value.zeroize(),
			SecretToken::File(path) => *path = PathBuf::new(),
		}
	}
}

impl Drop for SecretToken {
	fn drop(&mut self) {
		self.zeroize();
	}
}

impl ZeroizeOnDrop for SecretToken {}

/// Resolved secret content.
///
/// The bytes are zeroized when the value is dropped. `Debug` only shows the
/// length.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
	/// Wraps resolved bytes
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	/// Gets a reference to the secret bytes.
	///
	/// # Security Note
	///
	/// The reference should be used immediately and not stored.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Number of bytes in the secret
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Checks if the secret is empty
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Views the secret as UTF-8 text
	///
	/// # Errors
	///
	/// Returns an encoding error if the bytes are not valid UTF-8.
	pub fn to_str(&self) -> Result<&str, SecurityError> {
		std::str::from_utf8(&self.0).map_err(|e| {
			SecurityError::encoding_error(
				"Secret is not valid UTF-8",
				Some(Box::new(e)),
				Some(HashMap::from([(
					"valid_up_to".to_string(),
					e.valid_up_to().to_string(),
				)])),
			)
		})
	}
}

impl AsRef<[u8]> for SecretBytes {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl fmt::Debug for SecretBytes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretBytes(<{} bytes redacted>)", self.0.len())
	}
}
