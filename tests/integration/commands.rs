use secret_token::{
	bootstrap::{
		check_command, check_config, get_command, load_environment_file, resolve_command,
		BootstrapError,
	},
	models::{ConfigLoader, ResolverConfig, SecretToken, TextEncoding},
	utils::OutputFormat,
};
use std::path::{Path, PathBuf};

fn create_test_config(dir: &Path, secret_file: &Path) -> PathBuf {
	let path = dir.join("secrets.json");
	let config = serde_json::json!({
		"encoding": "utf8",
		"secrets": {
			"api_token": format!("@{}", secret_file.display()),
			"username": "deploy-bot",
		}
	});
	std::fs::write(&path, serde_json::to_vec_pretty(&config).unwrap()).unwrap();
	path
}

fn create_secret_file(dir: &Path, content: &[u8]) -> PathBuf {
	let path = dir.join("api_token");
	std::fs::write(&path, content).unwrap();
	path
}

#[test]
fn test_resolve_command_raw() {
	let mut out = Vec::new();
	let token = SecretToken::parse("value");

	resolve_command(
		&mut out,
		Some(&token),
		TextEncoding::Utf8,
		OutputFormat::Raw,
		false,
	)
	.unwrap();
	assert_eq!(out, b"value");
}

#[test]
fn test_resolve_command_file_as_hex() {
	let dir = tempfile::tempdir().unwrap();
	let secret = create_secret_file(dir.path(), b"\x00\xff");
	let token = SecretToken::parse(&format!("@{}", secret.display()));

	let mut out = Vec::new();
	resolve_command(
		&mut out,
		Some(&token),
		TextEncoding::Utf8,
		OutputFormat::Hex,
		true,
	)
	.unwrap();
	assert_eq!(out, b"00ff\n");
}

#[test]
fn test_resolve_command_without_token() {
	let mut out = Vec::new();
	let error = resolve_command(&mut out, None, TextEncoding::Utf8, OutputFormat::Raw, false)
		.unwrap_err();

	assert!(matches!(error, BootstrapError::MissingToken(_)));
	assert!(error.to_string().contains("SECRET_TOKEN"));
	assert!(out.is_empty());
}

#[test]
fn test_resolve_command_missing_file_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let token = SecretToken::File(dir.path().join("missing"));

	let mut out = Vec::new();
	let error = resolve_command(
		&mut out,
		Some(&token),
		TextEncoding::Utf8,
		OutputFormat::Raw,
		true,
	)
	.unwrap_err();

	match error {
		BootstrapError::Security(e) => assert!(e.is_file_access_error()),
		other => panic!("unexpected error: {:?}", other),
	}
	assert!(out.is_empty());
}

#[test]
fn test_get_command() {
	let dir = tempfile::tempdir().unwrap();
	let secret = create_secret_file(dir.path(), b"token-from-file");
	let config = create_test_config(dir.path(), &secret);

	let mut out = Vec::new();
	get_command(&mut out, &config, "api_token", OutputFormat::Raw, false).unwrap();
	assert_eq!(out, b"token-from-file");

	let mut out = Vec::new();
	get_command(&mut out, &config, "username", OutputFormat::Base64, false).unwrap();
	assert_eq!(out, b"ZGVwbG95LWJvdA==");
}

#[test]
fn test_get_command_unknown_secret() {
	let dir = tempfile::tempdir().unwrap();
	let secret = create_secret_file(dir.path(), b"x");
	let config = create_test_config(dir.path(), &secret);

	let mut out = Vec::new();
	let error = get_command(&mut out, &config, "nope", OutputFormat::Raw, false).unwrap_err();
	assert!(matches!(error, BootstrapError::Config(_)));
}

#[test]
fn test_check_command_success() {
	let dir = tempfile::tempdir().unwrap();
	let secret = create_secret_file(dir.path(), b"super-secret-value");
	let config = create_test_config(dir.path(), &secret);

	let mut out = Vec::new();
	check_command(&mut out, &config).unwrap();

	let report = String::from_utf8(out).unwrap();
	assert_eq!(
		report,
		"api_token (file): ok, 18 bytes\nusername (literal): ok, 10 bytes\n"
	);
	assert!(!report.contains("super-secret-value"));
	assert!(!report.contains("deploy-bot"));
}

#[test]
fn test_check_command_reports_failures() {
	let dir = tempfile::tempdir().unwrap();
	let config = create_test_config(dir.path(), &dir.path().join("missing"));

	let mut out = Vec::new();
	let error = check_command(&mut out, &config).unwrap_err();
	assert!(matches!(
		error,
		BootstrapError::CheckFailed {
			failed: 1,
			total: 2
		}
	));

	let report = String::from_utf8(out).unwrap();
	assert!(report.contains("api_token (file): error: File access error"));
	assert!(report.contains("username (literal): ok, 10 bytes"));
}

#[test]
fn test_check_config_uses_configured_encoding() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("ascii.json");
	std::fs::write(
		&path,
		r#"{"encoding": "ascii", "secrets": {"accented": "café", "plain": "cafe"}}"#,
	)
	.unwrap();

	let config = ResolverConfig::load_from_path(&path).unwrap();
	let reports = check_config(&config);

	assert_eq!(reports.len(), 2);
	assert_eq!(reports[0].name, "accented");
	assert!(reports[0].outcome.is_err());
	assert_eq!(reports[1].name, "plain");
	assert_eq!(reports[1].outcome, Ok(4));
}

#[test]
fn test_load_environment_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(".env");
	std::fs::write(&path, "SECRET_TOKEN_DOTENV_LOAD_TEST=@/run/secrets/token\n").unwrap();

	let loaded = load_environment_file(&path).unwrap();
	assert_eq!(loaded, Some(path));
	assert_eq!(
		std::env::var("SECRET_TOKEN_DOTENV_LOAD_TEST").unwrap(),
		"@/run/secrets/token"
	);
}

#[test]
fn test_load_environment_file_malformed() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(".env");
	std::fs::write(&path, "BAD LINE WITHOUT EQUALS\n").unwrap();

	let error = load_environment_file(&path).unwrap_err();
	assert!(!error.not_found());
}

#[test]
fn test_load_environment_file_missing() {
	let dir = tempfile::tempdir().unwrap();
	assert_eq!(load_environment_file(&dir.path().join(".env")).unwrap(), None);
}
