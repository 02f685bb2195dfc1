//! Text encodings for literal secret values.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use crate::models::security::error::SecurityError;

/// Encoding applied to a literal token before it is returned as bytes
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
	/// UTF-8, the native encoding of Rust strings. Never fails.
	#[default]
	Utf8,
	/// 7-bit ASCII. Characters above U+007F are rejected.
	Ascii,
	/// ISO-8859-1. Characters up to U+00FF map to one byte each; others are rejected.
	Latin1,
}

impl TextEncoding {
	/// Lowercase name used in config files and on the command line
	pub fn name(&self) -> &'static str {
		match self {
			TextEncoding::Utf8 => "utf8",
			TextEncoding::Ascii => "ascii",
			TextEncoding::Latin1 => "latin1",
		}
	}

	fn max_code_point(&self) -> u32 {
		match self {
			TextEncoding::Utf8 => char::MAX as u32,
			TextEncoding::Ascii => 0x7f,
			TextEncoding::Latin1 => 0xff,
		}
	}

	/// Encodes `value` into bytes
	///
	/// # Errors
	///
	/// Returns an encoding error naming the character position (not the
	/// character itself) of the first code point the encoding cannot represent.
	pub fn encode(&self, value: &str) -> Result<Vec<u8>, SecurityError> {
		if let TextEncoding::Utf8 = self {
			return Ok(value.as_bytes().to_vec());
		}

		let max = self.max_code_point();
		let mut bytes = Vec::with_capacity(value.len());
		for (position, c) in value.chars().enumerate() {
			let code_point = c as u32;
			if code_point > max {
				return Err(SecurityError::encoding_error(
					format!("Literal value cannot be encoded as {}", self.name()),
					None,
					Some(HashMap::from([
						("encoding".to_string(), self.name().to_string()),
						("position".to_string(), position.to_string()),
					])),
				));
			}
			// Both restricted encodings map code points one-to-one onto bytes
			bytes.push(code_point as u8);
		}
		Ok(bytes)
	}
}

impl fmt::Display for TextEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}
