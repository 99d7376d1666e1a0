use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use forgecart_cart::CartStorage;
use forgecart_core::{CartError, CartResult};

/// One file as the durable slot, holding the serialized cart verbatim.
///
/// Read-all/write-all semantics: an absent file is an empty slot and every
/// write replaces the whole file. Last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileCartStorage {
    path: PathBuf,
}

impl JsonFileCartStorage {
    /// Open a slot at `path`, creating parent directories as needed.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create cart storage directory at {}", parent.display())
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileCartStorage {
    fn read(&self) -> CartResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartError::storage(format!("read {}: {e}", self.path.display()))),
        }
    }

    fn write(&self, snapshot: &str) -> CartResult<()> {
        fs::write(&self.path, snapshot)
            .map_err(|e| CartError::storage(format!("write {}: {e}", self.path.display())))
    }
}
