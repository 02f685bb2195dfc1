//! Secret token resolution for command-line clients.
//!
//! A secret token is either the secret itself or `@` followed by the path of
//! a file that holds it. [`models::resolve`] turns a token into the secret
//! bytes; the `secret-token` binary exposes the same operation on the command
//! line together with named tokens loaded from a JSON config file.
//!
//! - `bootstrap`: Command implementations used by the binary
//! - `models`: Secret tokens, resolution, configuration and error types
//! - `utils`: Error context, logging setup and output rendering

pub mod bootstrap;
pub mod models;
pub mod utils;

/// Environment variable read when no token is given on the command line
pub const TOKEN_ENV: &str = "SECRET_TOKEN";

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SECRET_TOKEN_CONFIG";

/// Environment variable selecting the literal encoding
pub const ENCODING_ENV: &str = "SECRET_TOKEN_ENCODING";
