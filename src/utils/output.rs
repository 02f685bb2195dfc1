//! Rendering of resolved secrets for the command line.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use zeroize::Zeroizing;

/// How resolved bytes are written to the output stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// The bytes exactly as resolved
	#[default]
	Raw,
	/// Lowercase hexadecimal
	Hex,
	/// Standard base64 with padding
	Base64,
}

impl OutputFormat {
	/// Renders `bytes` in this format. The returned buffer is zeroized on drop.
	pub fn render(&self, bytes: &[u8]) -> Zeroizing<Vec<u8>> {
		Zeroizing::new(match self {
			OutputFormat::Raw => bytes.to_vec(),
			OutputFormat::Hex => hex::encode(bytes).into_bytes(),
			OutputFormat::Base64 => STANDARD.encode(bytes).into_bytes(),
		})
	}

	/// Writes `bytes` to `writer`, optionally followed by a newline
	pub fn write_to<W: Write>(
		&self,
		writer: &mut W,
		bytes: &[u8],
		newline: bool,
	) -> std::io::Result<()> {
		writer.write_all(&self.render(bytes))?;
		if newline {
			writer.write_all(b"\n")?;
		}
		writer.flush()
	}
}
