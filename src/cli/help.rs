//! Command-name contract for logging and routing.

use crate::cli::parse::{
    ApplicationCommands, Commands, IdentityCommands, IdentitySourceCommands, TenantCommands,
};

/// Command name string for log spans (e.g. "applications.delete").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Applications { command } => {
            format!("applications.{}", application_command_name(command))
        }
        Commands::IdentitySources { command, .. } => {
            format!("identitysources.{}", identity_source_command_name(command))
        }
        Commands::Identities { command, .. } => {
            format!("identities.{}", identity_command_name(command))
        }
        Commands::Tenants { command, .. } => format!("tenants.{}", tenant_command_name(command)),
    }
}

pub fn application_command_name(command: &ApplicationCommands) -> &'static str {
    match command {
        ApplicationCommands::Create { .. } => "create",
        ApplicationCommands::Update { .. } => "update",
        ApplicationCommands::Delete { .. } => "delete",
        ApplicationCommands::List { .. } => "list",
    }
}

pub fn identity_source_command_name(command: &IdentitySourceCommands) -> &'static str {
    match command {
        IdentitySourceCommands::Create { .. } => "create",
        IdentitySourceCommands::Update { .. } => "update",
        IdentitySourceCommands::Delete { .. } => "delete",
        IdentitySourceCommands::List { .. } => "list",
    }
}

pub fn identity_command_name(command: &IdentityCommands) -> &'static str {
    match command {
        IdentityCommands::Create { .. } => "create",
        IdentityCommands::Update { .. } => "update",
        IdentityCommands::Delete { .. } => "delete",
        IdentityCommands::List { .. } => "list",
    }
}

pub fn tenant_command_name(command: &TenantCommands) -> &'static str {
    match command {
        TenantCommands::Create { .. } => "create",
        TenantCommands::Update { .. } => "update",
        TenantCommands::Delete { .. } => "delete",
        TenantCommands::List { .. } => "list",
    }
}
