//! Error types for the aapctl command layer.

use thiserror::Error;

/// Failures raised by the remote client adapter.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid aap target {0}")]
    InvalidTarget(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Remote call failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Client runtime error: {0}")]
    Runtime(String),
}

/// Pre-flight errors: configuration, context, printer or logging setup.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid output mode: {0} (must be 'terminal' or 'json')")]
    InvalidOutput(String),

    #[error("Invalid working directory: {0}")]
    InvalidWorkdir(String),

    #[error("Printer error: {0}")]
    Printer(String),

    #[error("Failed to render output: {0}")]
    Render(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

/// Outcome of a failed command.
///
/// `Silent` means the failure has already been communicated to the user
/// (or deliberately left to the exit code); the outer runner must not
/// print it again. `Unreported` carries an error nobody has shown yet.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command failed")]
    Silent,

    #[error(transparent)]
    Unreported(#[from] CliError),
}

impl CommandError {
    pub fn is_silent(&self) -> bool {
        matches!(self, CommandError::Silent)
    }
}
