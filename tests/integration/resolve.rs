use secret_token::models::{resolve, resolve_with_encoding, SecretToken, TextEncoding};
use std::{io::ErrorKind, sync::Arc, thread};

fn write_secret(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> String {
	let path = dir.path().join(name);
	std::fs::write(&path, content).unwrap();
	format!("@{}", path.display())
}

#[test]
fn test_literal_value() {
	assert_eq!(resolve("value").unwrap().as_bytes(), b"value");
}

#[test]
fn test_file_reference() {
	let dir = tempfile::tempdir().unwrap();
	let token = write_secret(&dir, "secret.txt", b"file content");

	assert_eq!(resolve(&token).unwrap().as_bytes(), b"file content");
}

#[test]
fn test_missing_file_propagates_not_found() {
	let dir = tempfile::tempdir().unwrap();
	let token = format!("@{}", dir.path().join("absent").display());

	let error = resolve(&token).unwrap_err();
	assert!(error.is_file_access_error());
	assert_eq!(error.io_error_kind(), Some(ErrorKind::NotFound));

	let source = std::error::Error::source(&error).expect("io error is kept as source");
	assert!(source.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_empty_file() {
	let dir = tempfile::tempdir().unwrap();
	let token = write_secret(&dir, "empty", b"");

	assert!(resolve(&token).unwrap().is_empty());
}

#[test]
fn test_encoding_only_applies_to_literals() {
	let dir = tempfile::tempdir().unwrap();
	let token = write_secret(&dir, "utf8.txt", "pässwörd".as_bytes());

	assert_eq!(
		resolve_with_encoding(&token, TextEncoding::Ascii)
			.unwrap()
			.as_bytes(),
		"pässwörd".as_bytes()
	);
	assert!(resolve_with_encoding("pässwörd", TextEncoding::Ascii)
		.unwrap_err()
		.is_encoding_error());
}

#[test]
fn test_concurrent_resolution() {
	let dir = tempfile::tempdir().unwrap();
	let token = Arc::new(SecretToken::parse(&write_secret(
		&dir,
		"shared.txt",
		b"shared secret",
	)));

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let token = token.clone();
			thread::spawn(move || token.resolve(TextEncoding::Utf8).unwrap())
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap().as_bytes(), b"shared secret");
	}
}

#[tokio::test]
async fn test_concurrent_async_resolution() {
	let dir = tempfile::tempdir().unwrap();
	let token = Arc::new(SecretToken::parse(&write_secret(
		&dir,
		"async.txt",
		b"async secret",
	)));

	let tasks: Vec<_> = (0..8)
		.map(|_| {
			let token = token.clone();
			tokio::spawn(async move { token.resolve_async(TextEncoding::Utf8).await })
		})
		.collect();

	for task in tasks {
		assert_eq!(task.await.unwrap().unwrap().as_bytes(), b"async secret");
	}
}
