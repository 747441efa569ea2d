//! File-backed storage slot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{StorageSlot, SLOT_KEY};

/// Stores the snapshot as `portfolioData.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at the given data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The default data directory, `~/.folio`.
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".folio")
    }

    /// Path of the slot file inside the data directory.
    pub fn slot_file(&self) -> PathBuf {
        self.dir.join(format!("{SLOT_KEY}.json"))
    }

    /// The data directory this slot writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        let path = self.slot_file();

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Write using the write-to-temp-then-rename pattern so the slot is
    /// never left partially written if the process dies mid-save.
    fn write(&self, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_file();
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.slot_file();

        if path.exists() {
            fs::remove_file(&path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_slot_returns_none() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path());

        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path());

        slot.write("{\"services\":[]}").unwrap();

        assert_eq!(slot.read().unwrap().as_deref(), Some("{\"services\":[]}"));
    }

    #[test]
    fn write_creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path().join("nested").join("dir"));

        slot.write("{}").unwrap();

        assert!(slot.slot_file().exists());
    }

    #[test]
    fn write_uses_atomic_rename() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path());

        slot.write("{}").unwrap();

        let temp_path = slot.slot_file().with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful write"
        );
    }

    #[test]
    fn clear_removes_the_slot_file() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path());

        slot.write("{}").unwrap();
        slot.clear().unwrap();

        assert!(!slot.slot_file().exists());
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn clear_on_empty_slot_is_ok() {
        let temp = TempDir::new().unwrap();
        let slot = FileSlot::new(temp.path());

        assert!(slot.clear().is_ok());
        assert!(slot.clear().is_ok());
    }

    #[test]
    fn slot_file_uses_fixed_key() {
        let slot = FileSlot::new("/data");
        assert!(slot.slot_file().ends_with("portfolioData.json"));
    }
}
