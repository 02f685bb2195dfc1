//! Command-line entry point for secret token resolution.
//!
//! The binary resolves secret tokens (literal values or `@path` file
//! references) and writes the resulting bytes to stdout. Logs go to stderr.
//!
//! The service follows these main steps:
//! 1. Loads a `.env` file if one is present
//! 2. Parses arguments, falling back to environment variables
//! 3. Sets up logging and reports any problem with the `.env` file
//! 4. Runs the selected command and reports the error chain on failure

use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};

use secret_token::{
	bootstrap::{
		check_command, get_command, load_environment, report_environment, resolve_command,
	},
	models::{SecretToken, TextEncoding},
	utils::{
		format_error_chain,
		logging::{parse_log_level, setup_logging},
		OutputFormat,
	},
	CONFIG_ENV, ENCODING_ENV, TOKEN_ENV,
};

#[derive(Debug, Parser)]
#[command(version, about = "Resolve secret tokens given literally or as @file references")]
struct Cli {
	/// Log filter used when RUST_LOG is not set (e.g. "debug")
	#[arg(long, global = true, value_parser = parse_log_level)]
	log_level: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Resolve a token and print the secret
	Resolve {
		/// Literal secret, or @PATH to read the secret from a file
		#[arg(env = TOKEN_ENV, hide_env_values = true)]
		token: Option<SecretToken>,

		/// Encoding for literal tokens
		#[arg(long, value_enum, env = ENCODING_ENV, default_value_t)]
		encoding: TextEncoding,

		#[command(flatten)]
		output: OutputArgs,
	},
	/// Resolve a named token from a config file
	Get {
		/// Name of the secret in the config file
		name: String,

		/// Path to the JSON config file
		#[arg(long, env = CONFIG_ENV)]
		config: PathBuf,

		#[command(flatten)]
		output: OutputArgs,
	},
	/// Validate a config file and resolve every secret in it without printing values
	Check {
		/// Path to the JSON config file
		#[arg(long, env = CONFIG_ENV)]
		config: PathBuf,
	},
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
	/// How to print the secret
	#[arg(long, value_enum, default_value_t)]
	format: OutputFormat,

	/// Append a newline after the secret
	#[arg(long)]
	newline: bool,
}

fn run(command: Command) -> anyhow::Result<()> {
	let mut stdout = std::io::stdout().lock();
	match command {
		Command::Resolve {
			token,
			encoding,
			output,
		} => resolve_command(
			&mut stdout,
			token.as_ref(),
			encoding,
			output.format,
			output.newline,
		)?,
		Command::Get {
			name,
			config,
			output,
		} => get_command(&mut stdout, &config, &name, output.format, output.newline)?,
		Command::Check { config } => check_command(&mut stdout, &config)?,
	}
	Ok(())
}

fn main() -> ExitCode {
	let environment = load_environment();
	let cli = Cli::parse();
	if let Err(e) = setup_logging(cli.log_level.as_deref()) {
		eprintln!("Error: invalid RUST_LOG filter: {}", e);
		return ExitCode::FAILURE;
	}
	report_environment(&environment);

	match run(cli.command) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {}", format_error_chain(&e));
			ExitCode::FAILURE
		}
	}
}
