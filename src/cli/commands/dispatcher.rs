//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing through the given output.
    fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The data directory commands operate on.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// No subcommand defaults to `status`.
    pub fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Profile(args)) => {
                let cmd = super::profile::ProfileCommand::new(&self.data_dir, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Services { action }) => {
                let cmd = super::services::ServicesCommand::new(&self.data_dir, action);
                cmd.execute(out)
            }
            Some(Commands::Projects { action }) => {
                let cmd = super::projects::ProjectsCommand::new(&self.data_dir, action);
                cmd.execute(out)
            }
            Some(Commands::Testimonials { action }) => {
                let cmd =
                    super::testimonials::TestimonialsCommand::new(&self.data_dir, action);
                cmd.execute(out)
            }
            Some(Commands::Availability(args)) => {
                let cmd =
                    super::availability::AvailabilityCommand::new(&self.data_dir, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(&self.data_dir, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Preview) => {
                let cmd = super::preview::PreviewCommand::new(&self.data_dir);
                cmd.execute(out)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(&self.data_dir, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Clear(args)) => {
                let cmd = super::clear::ClearCommand::new(&self.data_dir, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd =
                    super::status::StatusCommand::new(&self.data_dir, StatusArgs::default());
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure_carries_exit_code() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_keeps_data_dir() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/tmp/folio"));
        assert_eq!(dispatcher.data_dir(), Path::new("/tmp/folio"));
    }
}
