/// Command dispatch: routes `Command` groups to their implementations.
pub mod art;
pub mod code;
pub mod data;
pub mod input;
pub mod text;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::powers::PowerError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `PowerError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), PowerError> {
    match command {
        Command::Text(command) => text::run(command, ctx),
        Command::Code(command) => code::run(command, ctx),
        Command::Data(command) => data::run(command, ctx),
        Command::Art(command) => art::run(command, ctx),
    }
}
