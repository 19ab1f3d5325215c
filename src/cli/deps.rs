//! Dependency provider passed explicitly into every command: creates the
//! printer for the selected output mode and the remote client for a target.

use crate::cli::output::OutputMode;
use crate::cli::printer::{Printer, StdPrinter};
use crate::client::{AapClient, HttpAapClient};
use crate::error::{CliError, ClientError};

pub trait CliDependencies {
    /// Printer bound to the selected output mode.
    fn create_printer(
        &self,
        output: OutputMode,
        verbose: bool,
    ) -> Result<Box<dyn Printer>, CliError>;

    /// Remote client bound to the AAP target address.
    fn create_aap_client(&self, target: &str) -> Result<Box<dyn AapClient>, ClientError>;
}

/// Production dependencies: stdio printer and HTTP client.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDependencies;

impl CliDependencies for DefaultDependencies {
    fn create_printer(
        &self,
        output: OutputMode,
        verbose: bool,
    ) -> Result<Box<dyn Printer>, CliError> {
        Ok(Box::new(StdPrinter::stdio(output, verbose)))
    }

    fn create_aap_client(&self, target: &str) -> Result<Box<dyn AapClient>, ClientError> {
        Ok(Box::new(HttpAapClient::new(target)?))
    }
}
