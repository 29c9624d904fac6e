pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::utils::{GitUtilError, Result};

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Status(args)) => commands::status::execute(args),
        Some(Commands::Sync(args)) => commands::sync::execute(args),
        None => {
            let repo = std::env::current_dir().map_err(|e| {
                GitUtilError::fs(format!("failed to get current directory: {e}"))
            })?;
            commands::clean::execute(&repo, cli.clean)
        }
    }
}
