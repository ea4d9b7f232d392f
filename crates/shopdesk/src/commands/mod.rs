//! Command dispatch: bridges CLI args -> core list sessions -> output formatting.

pub mod brands;
pub mod config_cmd;
pub mod notifications;
pub mod products;
pub mod util;

use shopdesk_core::Backoffice;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    backoffice: &Backoffice,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Brands(args) => brands::handle(backoffice, args, global).await,
        Command::Products(args) => products::handle(backoffice, args, global).await,
        Command::Notifications(args) => notifications::handle(backoffice, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "local command reached backend dispatch".into(),
        )),
    }
}
