use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// imagine-pi: browse Raspberry Pi OS images from the Raspberry Pi Imager catalog
#[derive(Debug, Parser)]
#[command(name = "imagine-pi")]
#[command(version)]
#[command(about = "A Pi imaging tool")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// JSON settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog to read instead of the official Raspberry Pi Imager list
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// OS information
    Os {
        #[command(subcommand)]
        command: OsCommands,
    },

    /// Local device interaction
    Device {
        #[command(subcommand)]
        command: DeviceCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum OsCommands {
    /// List the operating systems available for the Raspberry Pi
    List {
        /// Show only the URLs of the operating systems
        #[arg(short, long)]
        url: bool,
    },

    /// Show detailed information on a single OS
    Show(ShowArgs),
}

/// Exactly one selector is required.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct ShowArgs {
    /// Name of the OS to show, see `imagine-pi os list` for known names
    #[arg(short, long)]
    pub name: Option<String>,

    /// URL of the OS to show, see `imagine-pi os list --url` for known URLs
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum DeviceCommands {
    /// List available devices
    List,

    /// Get detailed information on a single device
    Get {
        /// Path of the device
        path: PathBuf,
    },

    /// Initialize a device for imaging
    Init {
        /// Path of the device
        path: PathBuf,
    },
}

impl Commands {
    /// Command path used in log lines, eg. `os show`
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Os { command } => match command {
                OsCommands::List { .. } => "os list",
                OsCommands::Show(_) => "os show",
            },
            Commands::Device { command } => match command {
                DeviceCommands::List => "device list",
                DeviceCommands::Get { .. } => "device get",
                DeviceCommands::Init { .. } => "device init",
            },
        }
    }
}
