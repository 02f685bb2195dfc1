//! Command implementations for the `secret-token` binary.
//!
//! Each function here backs one subcommand. They take plain arguments and a
//! writer so they can be driven from tests without spawning the binary.

use std::{
	io::Write,
	path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
	models::{
		ConfigError, ConfigLoader, ResolverConfig, SecretBytes, SecretToken, SecurityError,
		TextEncoding,
	},
	utils::OutputFormat,
};

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum BootstrapError {
	/// The configuration file could not be loaded or is invalid
	#[error(transparent)]
	Config(#[from] Box<ConfigError>),

	/// A secret could not be resolved
	#[error(transparent)]
	Security(#[from] SecurityError),

	/// The resolved secret could not be written
	#[error("Failed to write secret: {0}")]
	Output(#[from] std::io::Error),

	/// No token was given on the command line or in the environment
	#[error("No secret token given; pass one as an argument or set {0}")]
	MissingToken(&'static str),

	/// At least one configured secret failed to resolve during a check
	#[error("{failed} of {total} configured secrets failed to resolve")]
	CheckFailed { failed: usize, total: usize },
}

/// Outcome of resolving one configured secret during a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReport {
	/// Name of the secret in the config file
	pub name: String,
	/// Whether the token references a file
	pub file_reference: bool,
	/// Resolved length in bytes, or the error message
	pub outcome: Result<usize, String>,
}

/// Loads variables from a `.env` file in the working directory or its parents.
///
/// Runs before logging is set up, so nothing is logged here; the caller
/// reports the outcome with [`report_environment`] once a subscriber exists.
/// A missing file is not an error.
pub fn load_environment() -> Result<Option<PathBuf>, dotenvy::Error> {
	not_found_as_none(dotenvy::dotenv())
}

/// Loads variables from the environment file at `path`
pub fn load_environment_file(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
	not_found_as_none(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn not_found_as_none(
	result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
	match result {
		Ok(path) => Ok(Some(path)),
		Err(e) if e.not_found() => Ok(None),
		Err(e) => Err(e),
	}
}

/// Logs the outcome of [`load_environment`]
pub fn report_environment(result: &Result<Option<PathBuf>, dotenvy::Error>) {
	match result {
		Ok(Some(path)) => tracing::debug!(path = %path.display(), "loaded environment file"),
		Ok(None) => {}
		Err(e) => warn!(error = %e, "failed to load environment file"),
	}
}

/// Resolves a single token and writes it to `writer`
pub fn resolve_command<W: Write>(
	writer: &mut W,
	token: Option<&SecretToken>,
	encoding: TextEncoding,
	format: OutputFormat,
	newline: bool,
) -> Result<(), BootstrapError> {
	let token = token.ok_or(BootstrapError::MissingToken(crate::TOKEN_ENV))?;
	let secret = token.resolve(encoding)?;
	write_secret(writer, &secret, format, newline)
}

/// Resolves a named token from a config file and writes it to `writer`
pub fn get_command<W: Write>(
	writer: &mut W,
	config_path: &Path,
	name: &str,
	format: OutputFormat,
	newline: bool,
) -> Result<(), BootstrapError> {
	let config = ResolverConfig::load_from_path(config_path)?;
	let token = config.secret(name)?;
	let secret = config.resolve(token)?;
	write_secret(writer, &secret, format, newline)
}

/// Resolves every configured secret and reports names and lengths.
///
/// Secret values are never written. Fails with [`BootstrapError::CheckFailed`]
/// after writing the report if any secret could not be resolved.
pub fn check_command<W: Write>(writer: &mut W, config_path: &Path) -> Result<(), BootstrapError> {
	let config = ResolverConfig::load_from_path(config_path)?;
	let reports = check_config(&config);

	for report in &reports {
		let kind = if report.file_reference { "file" } else { "literal" };
		match &report.outcome {
			Ok(len) => writeln!(writer, "{} ({}): ok, {} bytes", report.name, kind, len)?,
			Err(e) => writeln!(writer, "{} ({}): error: {}", report.name, kind, e)?,
		}
	}

	let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
	if failed > 0 {
		return Err(BootstrapError::CheckFailed {
			failed,
			total: reports.len(),
		});
	}

	info!(secrets = reports.len(), "all configured secrets resolved");
	Ok(())
}

/// Resolves every secret in `config`, in name order
pub fn check_config(config: &ResolverConfig) -> Vec<SecretReport> {
	config
		.secrets
		.iter()
		.map(|(name, token)| SecretReport {
			name: name.clone(),
			file_reference: token.is_file_reference(),
			outcome: config
				.resolve(token)
				.map(|secret| secret.len())
				.map_err(|e| e.to_string()),
		})
		.collect()
}

fn write_secret<W: Write>(
	writer: &mut W,
	secret: &SecretBytes,
	format: OutputFormat,
	newline: bool,
) -> Result<(), BootstrapError> {
	format.write_to(writer, secret.as_bytes(), newline)?;
	Ok(())
}
