use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SLOT_EXT: &str = ".json";

/// File-backed slots: each key is a JSON file inside `root`.
#[derive(Debug)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        debug!(path = %path.display(), bytes = content.len(), "read slot");
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.slot_path(key);

        // Write next to the target, then rename over it
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }
        debug!(path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, SLOT_EXT))
    }
}
