//! Clear command implementation.
//!
//! The `folio clear` command resets every entity to its empty default and
//! deletes the saved snapshot. Irreversible, so it confirms first unless
//! `--force` is given.

use std::path::{Path, PathBuf};

use crate::cli::args::ClearArgs;
use crate::error::Result;
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The clear command implementation.
pub struct ClearCommand {
    data_dir: PathBuf,
    args: ClearArgs,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(data_dir: &Path, args: ClearArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ClearCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        if !self.args.force
            && !prompts::confirm("Delete all portfolio data? This cannot be undone", false)?
        {
            out.message("Nothing deleted");
            return Ok(CommandResult::success());
        }

        let mut store = open_store(&self.data_dir);
        store.clear_all()?;

        out.success("All portfolio data deleted");
        Ok(CommandResult::success())
    }
}
