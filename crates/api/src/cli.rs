//! Command-line interface and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use upsbridge_domain::Result;
use upsbridge_infra::InfraError;

use crate::commands::{acquire_token, build_payload, code_tables, submit_shipment};
use crate::context::{AppContext, ContextOptions, DEFAULT_ADDRESS_BOOK, DEFAULT_SHIPMENTS_DIR};
use crate::utils::logging::LogFormat;

/// UPS shipping bridge - OAuth token caching and shipment submission
#[derive(Debug, Parser)]
#[command(name = "upsbridge")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (environment and probed files otherwise)
    #[arg(short, long, env = "UPSBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address book file (JSON or TOML)
    #[arg(long, env = "UPSBRIDGE_ADDRESS_BOOK", default_value = DEFAULT_ADDRESS_BOOK)]
    pub address_book: PathBuf,

    /// Directory holding one `<name>.json` file per shipment
    #[arg(long, env = "UPSBRIDGE_SHIPMENTS_DIR", default_value = DEFAULT_SHIPMENTS_DIR)]
    pub shipments_dir: PathBuf,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Debug logging regardless of RUST_LOG
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Context options derived from the global arguments.
    pub fn context_options(&self) -> ContextOptions {
        ContextOptions {
            config_path: self.config.clone(),
            address_book: self.address_book.clone(),
            shipments_dir: self.shipments_dir.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Acquire a bearer token, refreshing it when stale, and report its expiry
    Token {
        /// Ignore the cached token
        #[arg(long)]
        refresh: bool,
    },
    /// Print the request that would be sent for a shipment
    Payload {
        /// Shipment name
        shipment: String,
    },
    /// Submit a shipment and record the carrier response
    Submit {
        /// Shipment name
        shipment: String,
    },
    /// Print the label-to-code lookup tables
    Codes,
}

impl Command {
    /// Stable identifier used in command logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Token { .. } => "token::acquire",
            Self::Payload { .. } => "shipment::payload",
            Self::Submit { .. } => "shipment::submit",
            Self::Codes => "codes::list",
        }
    }
}

/// Run a command and return its JSON report.
///
/// `codes` needs no configuration; every other command loads the
/// application context from `options` first.
///
/// # Errors
/// Returns the context initialisation error or the command's own failure.
pub async fn execute(command: &Command, options: &ContextOptions) -> Result<Value> {
    match command {
        Command::Codes => to_value(&code_tables()),
        Command::Token { refresh } => {
            let context = AppContext::new(options)?;
            to_value(&acquire_token(&context, *refresh).await?)
        }
        Command::Payload { shipment } => {
            let context = AppContext::new(options)?;
            build_payload(&context, shipment).await
        }
        Command::Submit { shipment } => {
            let context = AppContext::new(options)?;
            to_value(&submit_shipment(&context, shipment).await?)
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(InfraError::domain)
}
