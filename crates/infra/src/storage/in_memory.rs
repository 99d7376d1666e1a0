use std::sync::RwLock;

use forgecart_cart::CartStorage;
use forgecart_core::{CartError, CartResult};

/// In-memory durable slot.
///
/// Intended for tests/dev. Contents live and die with the process.
#[derive(Debug, Default)]
pub struct InMemoryCartStorage {
    slot: RwLock<Option<String>>,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-loaded with a snapshot, as if left by a previous session.
    pub fn seeded(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// Current raw contents.
    pub fn contents(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

impl CartStorage for InMemoryCartStorage {
    fn read(&self) -> CartResult<Option<String>> {
        let slot = self
            .slot
            .read()
            .map_err(|_| CartError::storage("lock poisoned"))?;
        Ok(slot.clone())
    }

    fn write(&self, snapshot: &str) -> CartResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| CartError::storage("lock poisoned"))?;
        *slot = Some(snapshot.to_string());
        Ok(())
    }
}
