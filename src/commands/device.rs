use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::DeviceCommands;

/// Device commands are placeholders until imaging lands; they only report
/// that nothing was done.
pub fn run(command: DeviceCommands) -> Result<String> {
    match command {
        DeviceCommands::List => Ok(not_implemented("device list", None)),
        DeviceCommands::Get { path } => Ok(not_implemented("device get", Some(&path))),
        DeviceCommands::Init { path } => Ok(not_implemented("device init", Some(&path))),
    }
}

fn not_implemented(command: &str, path: Option<&Path>) -> String {
    match path {
        Some(path) => {
            info!(command, path = %path.display(), "device command is not implemented");
            format!("{command} is not implemented yet ({})\n", path.display())
        }
        None => {
            info!(command, "device command is not implemented");
            format!("{command} is not implemented yet\n")
        }
    }
}
