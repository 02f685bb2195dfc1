//! Utility modules for common functionality.
//!
//! - error: Error context type and error chain formatting
//! - logging: Tracing subscriber setup
//! - output: Rendering resolved secrets as raw bytes, hex or base64

mod error;
pub mod logging;
mod output;

pub use error::*;
pub use output::OutputFormat;
