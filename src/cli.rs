//! CLI domain: parse, route, context, execution and output.
//! One route table dispatches every command through the shared executor.

pub mod commands;
pub mod context;
pub mod deps;
pub mod executor;
mod help;
pub mod output;
mod parse;
pub mod printer;
pub mod render;
mod route;

pub use context::{create_context_and_printer, CliContext};
pub use deps::{CliDependencies, DefaultDependencies};
pub use help::command_name;
pub use output::{map_error, report_preflight, OutputMap, OutputMode};
pub use parse::{
    ApplicationCommands, Cli, Commands, IdentityCommands, IdentitySourceCommands, ListArgs,
    TenantCommands,
};
pub use printer::{Printer, StdPrinter, StreamPrinter};
pub use route::{command_overrides, run, settings_sources};
