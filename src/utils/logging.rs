//! Logging utilities for the application
//!
//! Logs are written to stderr; stdout is reserved for resolved secret output.
//! The filter is taken from `RUST_LOG` when it is set, otherwise from the
//! level passed by the caller.
use std::io::IsTerminal;
use tracing_subscriber::{
	filter::{EnvFilter, ParseError},
	fmt,
	prelude::*,
};

/// Default filter directive when neither `RUST_LOG` nor a level is supplied
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter used by [`setup_logging`]
///
/// # Errors
///
/// Returns the parse error if `RUST_LOG` or `level` is not a valid filter
/// directive. Invalid directives are never replaced by the default.
pub fn build_env_filter(level: Option<&str>) -> Result<EnvFilter, ParseError> {
	let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
	filter_from(rust_log.as_deref(), level)
}

fn filter_from(rust_log: Option<&str>, level: Option<&str>) -> Result<EnvFilter, ParseError> {
	let directive = rust_log
		.filter(|value| !value.trim().is_empty())
		.or(level)
		.unwrap_or(DEFAULT_LOG_LEVEL);
	EnvFilter::try_new(directive)
}

/// Validates a `--log-level` argument as a filter directive
pub fn parse_log_level(value: &str) -> Result<String, String> {
	EnvFilter::try_new(value)
		.map(|_| value.to_string())
		.map_err(|e| format!("invalid log filter '{}': {}", value, e))
}

/// Whether colour escape codes should be written to `stream`
pub fn use_ansi(stream: &impl IsTerminal) -> bool {
	stream.is_terminal()
}

/// Setup logging for the application
///
/// Installs a `tracing_subscriber` registry with an env filter and a compact
/// console layer on stderr. Colours are only used when stderr is a terminal.
pub fn setup_logging(level: Option<&str>) -> Result<(), ParseError> {
	let ansi = use_ansi(&std::io::stderr());
	let subscriber = tracing_subscriber::registry()
		.with(build_env_filter(level)?)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(ansi)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		);

	// Try to set the subscriber, but don't panic if it fails
	let _ = subscriber.try_init();
	Ok(())
}
