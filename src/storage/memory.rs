//! In-memory storage slot for tests and embedding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;

use super::StorageSlot;

/// A slot held entirely in memory.
///
/// Clones share the same backing cell, so a test can keep a handle while the
/// store owns another and observe writes from outside. The write counter
/// exists to assert on persist behavior, most usefully that an unmatched
/// update-by-id writes nothing.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with the given contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        *slot.lock() = Some(contents.into());
        slot
    }

    /// Current contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Number of writes performed since creation.
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // A panicked holder cannot leave the plain String cell in a bad
        // state, so recover instead of propagating the poison.
        self.inner
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.lock() = Some(contents.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}
