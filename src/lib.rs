//! aapctl: command layer of the AAP administration client.
//!
//! Commands read their flags from a layered settings store, call the remote
//! AAP service through [`client::AapClient`] and print the result in terminal
//! or json mode.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
