use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, build::build, init::init, reorg::reorg, search::search},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and failure count
/// - `Err` if the command cannot run (e.g., source not found, malformed declaration)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Reorg(cmd)) => reorg(cmd),
        Some(Command::Search(cmd)) => search(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
