#![no_main]

use libfuzzer_sys::fuzz_target;
use secret_token::models::{SecretToken, TextEncoding};

fuzz_target!(|data: &str| {
	let token = SecretToken::parse(data);
	assert_eq!(token.is_file_reference(), data.starts_with('@'));

	// File references would touch the filesystem; only literals are resolved
	if !token.is_file_reference() {
		for encoding in [TextEncoding::Utf8, TextEncoding::Ascii, TextEncoding::Latin1] {
			if let Ok(secret) = token.resolve(encoding) {
				assert!(secret.len() <= data.len());
			}
		}
	}
});
