//! Integration tests for the aapctl command layer

mod application_commands;
mod identity_commands;
mod settings_layers;
mod tenant_commands;
