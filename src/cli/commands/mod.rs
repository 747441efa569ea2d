//! Subcommand implementations.

pub mod availability;
pub mod clear;
pub mod completions;
pub mod dispatcher;
pub mod export;
pub mod preview;
pub mod profile;
pub mod projects;
pub mod services;
pub mod status;
pub mod testimonials;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::portfolio::PortfolioStore;
use crate::storage::FileSlot;

/// Open the store backed by the slot in the given data directory.
pub(crate) fn open_store(data_dir: &Path) -> PortfolioStore {
    PortfolioStore::open(Box::new(FileSlot::new(data_dir)))
}
