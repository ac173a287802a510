// cli/src/cli/mod.rs

// Terminal front end for the intake form: one-shot commands plus an
// interactive session that renders the form after every edit.

pub mod cli;
pub mod commands;
pub mod handlers;
pub mod interactive;
pub mod render;

pub use cli::start_cli;
pub use commands::{CacheAction, CliArgs, DoctorsArgs, IntakeCommand, RefsTarget, SubmitArgs};
pub use interactive::{parse_command, run_cli_interactive, InteractiveCommand};
