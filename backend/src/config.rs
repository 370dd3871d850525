//! Command line and environment configuration.
//!
//! Every flag has an environment fallback so the server can be configured
//! either way. Without a subcommand the binary serves.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cropnavi", about = "Crop navigator document store and asset server")]
pub struct Cli {
    /// SQLite file holding the document collections.
    #[arg(long, env = "CROPNAVI_DATABASE", default_value = "cropnavi.sqlite", global = true)]
    pub database: PathBuf,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the client and the document API (default).
    Serve,
    /// Write the bundled dataset into the document store, one document per crop.
    Import(ImportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "CROPNAVI_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    #[arg(long, env = "CROPNAVI_PORT", default_value_t = 8080, global = true)]
    pub port: u16,

    /// Do not open the client in a browser on start.
    #[arg(long, env = "CROPNAVI_NO_BROWSER", global = true)]
    pub no_browser: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path of the region-keyed dataset (`cropsData.json`).
    #[arg(long)]
    pub dataset: PathBuf,

    #[arg(long, default_value = common::model::document::CROPS_COLLECTION)]
    pub collection: String,
}
