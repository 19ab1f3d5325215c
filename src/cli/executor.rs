//! Command executor shared by every remote command.
//!
//! Sequence: context and printer, remote client, request, exactly one remote
//! call, then either the failure report or the rendered output map. Every
//! failure ends in [`CommandError::Silent`] because it has already been
//! reported (or, in json mode, is signalled by the exit code alone).

use crate::cli::context::create_context_and_printer;
use crate::cli::deps::CliDependencies;
use crate::cli::output::{report_preflight, OutputMap, OutputMode};
use crate::cli::render::{render, render_all};
use crate::client::AapClient;
use crate::config::Settings;
use crate::error::{CliError, ClientError, CommandError};
use crate::models::Resource;
use tracing::{debug, warn};

/// Remote operation performed by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    List,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }
}

/// Static terminal message printed when the remote call fails.
pub fn failure_message<R: Resource>(operation: Operation) -> String {
    match operation {
        Operation::List => format!("Failed to list the {}.", R::PLURAL),
        Operation::Create | Operation::Update | Operation::Delete => {
            format!("Failed to {} the {}.", operation.verb(), R::NOUN)
        }
    }
}

/// Run a command whose remote call returns one record.
pub fn execute_single<R, F>(
    deps: &dyn CliDependencies,
    settings: &Settings,
    operation: Operation,
    call: F,
) -> Result<(), CommandError>
where
    R: Resource,
    F: FnOnce(&dyn AapClient, &Settings) -> Result<R, ClientError>,
{
    execute::<R, R, _, _>(deps, settings, operation, call, |record, mode| {
        render(record, mode)
    })
}

/// Run a command whose remote call returns a set of records.
pub fn execute_list<R, F>(
    deps: &dyn CliDependencies,
    settings: &Settings,
    call: F,
) -> Result<(), CommandError>
where
    R: Resource,
    F: FnOnce(&dyn AapClient, &Settings) -> Result<Vec<R>, ClientError>,
{
    execute::<R, Vec<R>, _, _>(deps, settings, Operation::List, call, |records, mode| {
        render_all(records, mode)
    })
}

fn execute<R, T, F, G>(
    deps: &dyn CliDependencies,
    settings: &Settings,
    operation: Operation,
    call: F,
    render_output: G,
) -> Result<(), CommandError>
where
    R: Resource,
    F: FnOnce(&dyn AapClient, &Settings) -> Result<T, ClientError>,
    G: FnOnce(&T, OutputMode) -> Result<OutputMap, CliError>,
{
    let (context, mut printer) = match create_context_and_printer(deps, settings) {
        Ok(pair) => pair,
        Err(err) => {
            warn!(error = %err, "Failed to create command context");
            report_preflight(&err);
            return Err(CommandError::Silent);
        }
    };
    debug!(
        output = %context.output(),
        verbose = context.is_verbose(),
        aap_target = context.aap_target(),
        "Command context ready"
    );

    let target = context.aap_target();
    let client = match deps.create_aap_client(target) {
        Ok(client) => client,
        Err(err) => {
            warn!(aap_target = target, error = %err, "Failed to create AAP client");
            printer.error(&ClientError::InvalidTarget(target.to_string()));
            return Err(CommandError::Silent);
        }
    };

    debug!(operation = operation.verb(), resource = R::NOUN, "Invoking remote operation");
    match call(client.as_ref(), settings) {
        Ok(result) => {
            debug!(
                operation = operation.verb(),
                resource = R::NOUN,
                "Remote operation succeeded"
            );
            match render_output(&result, context.output()) {
                Ok(output) => {
                    printer.println_map(&output);
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "Failed to render output");
                    printer.error(&err);
                    Err(CommandError::Silent)
                }
            }
        }
        Err(err) => {
            warn!(
                operation = operation.verb(),
                resource = R::NOUN,
                error = %err,
                "Remote operation failed"
            );
            match context.output() {
                OutputMode::Terminal => {
                    printer.println(&failure_message::<R>(operation));
                    if context.is_verbose() {
                        printer.error(&err);
                    }
                }
                OutputMode::Json => {}
            }
            Err(CommandError::Silent)
        }
    }
}
