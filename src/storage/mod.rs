//! Durable storage for the portfolio snapshot.
//!
//! The whole portfolio persists as one textual record under a fixed key.
//! [`StorageSlot`] is the explicit contract the store drives: read once at
//! construction, write after every mutation, clear on reset. [`FileSlot`]
//! is the production implementation; [`MemorySlot`] backs tests and
//! embedding.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// Fixed key the snapshot is stored under.
pub const SLOT_KEY: &str = "portfolioData";

/// A single named slot of durable textual storage.
pub trait StorageSlot {
    /// Read the slot contents, or `None` when nothing has been stored.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot contents.
    fn write(&self, contents: &str) -> Result<()>;

    /// Delete the slot entirely. Clearing an empty slot is not an error.
    fn clear(&self) -> Result<()>;
}
