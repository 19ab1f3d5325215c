//! CLI parse: clap types for aapctl. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aapctl - administration client for the AAP service
#[derive(Parser, Debug)]
#[command(name = "aapctl")]
#[command(about = "Manage applications, identity sources, identities and tenants on an AAP server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Working directory (default: current directory)
    #[arg(short = 'w', long, global = true)]
    pub workdir: Option<PathBuf>,

    /// Output mode (terminal or json)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Verbose output and debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// AAP server address (host:port or URL)
    #[arg(long = "aap-target", global = true)]
    pub aap_target: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommands,
    },
    /// Manage identity sources of an application
    #[command(name = "identitysources")]
    IdentitySources {
        /// Application id
        #[arg(long = "appid", global = true)]
        application_id: Option<i64>,
        #[command(subcommand)]
        command: IdentitySourceCommands,
    },
    /// Manage identities of an application
    Identities {
        /// Application id
        #[arg(long = "appid", global = true)]
        application_id: Option<i64>,
        #[command(subcommand)]
        command: IdentityCommands,
    },
    /// Manage tenants of an application
    Tenants {
        /// Application id
        #[arg(long = "appid", global = true)]
        application_id: Option<i64>,
        #[command(subcommand)]
        command: TenantCommands,
    },
}

/// Pagination and name filter shared by list verbs.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<i64>,
    /// Page size
    #[arg(long = "pagesize")]
    pub page_size: Option<i64>,
    /// Filter by name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    /// Create an application
    Create {
        /// Application name
        #[arg(long)]
        name: String,
    },
    /// Update an application
    Update {
        /// Application id
        #[arg(long = "appid")]
        application_id: i64,
        /// Application name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an application
    Delete {
        /// Application id
        #[arg(long = "appid")]
        application_id: i64,
    },
    /// List applications
    List {
        /// Filter by application id
        #[arg(long = "appid")]
        application_id: Option<i64>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum IdentitySourceCommands {
    /// Create an identity source
    Create {
        /// Identity source name
        #[arg(long)]
        name: String,
    },
    /// Update an identity source
    Update {
        /// Identity source id
        #[arg(long = "identitysourceid")]
        identity_source_id: String,
        /// Identity source name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an identity source
    Delete {
        /// Identity source id
        #[arg(long = "identitysourceid")]
        identity_source_id: String,
    },
    /// List identity sources
    List {
        /// Filter by identity source id
        #[arg(long = "identitysourceid")]
        identity_source_id: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum IdentityCommands {
    /// Create an identity
    Create {
        /// Identity source id
        #[arg(long = "identitysourceid")]
        identity_source_id: String,
        /// Identity name
        #[arg(long)]
        name: String,
        /// Identity kind (e.g. user, role-actor)
        #[arg(long, default_value = "user")]
        kind: String,
    },
    /// Update an identity
    Update {
        /// Identity id
        #[arg(long = "identityid")]
        identity_id: String,
        /// Identity name
        #[arg(long)]
        name: Option<String>,
        /// Identity kind
        #[arg(long)]
        kind: Option<String>,
    },
    /// Delete an identity
    Delete {
        /// Identity id
        #[arg(long = "identityid")]
        identity_id: String,
    },
    /// List identities
    List {
        /// Filter by identity id
        #[arg(long = "identityid")]
        identity_id: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum TenantCommands {
    /// Create a tenant
    Create {
        /// Tenant name
        #[arg(long)]
        name: String,
    },
    /// Update a tenant
    Update {
        /// Tenant id
        #[arg(long = "tenantid")]
        tenant_id: String,
        /// Tenant name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a tenant
    Delete {
        /// Tenant id
        #[arg(long = "tenantid")]
        tenant_id: String,
    },
    /// List tenants
    List {
        /// Filter by tenant id
        #[arg(long = "tenantid")]
        tenant_id: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
}
