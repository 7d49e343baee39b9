//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// oraconn - Oracle connection strings from a descriptor inventory
#[derive(Parser, Debug)]
#[command(name = "oraconn")]
#[command(version)]
#[command(
    about = "oraconn - Oracle connection strings from a descriptor inventory",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./oraconn.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log to stderr; repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render connection strings for descriptors
    Format(FormatArgs),

    /// List the descriptors of an inventory
    List(ListArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Format Command
// =============================================================================

/// Arguments for the `format` command
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format: jdbc, sqlplus, tns, pqdb or ski
    pub format: String,

    /// Descriptor ids to render
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Path to the inventory file
    #[arg(short, long)]
    pub inventory: Option<PathBuf>,

    /// Exit with an error when any diagnostic was recorded
    #[arg(long)]
    pub strict: bool,
}

// =============================================================================
// List Command
// =============================================================================

/// Arguments for the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the inventory file
    #[arg(short, long)]
    pub inventory: Option<PathBuf>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}
