use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{KeyScan, Ledger};

/// In-memory, `BTreeMap`-based ledger.
///
/// Intended for tests and embedding. Entries are held in memory behind a
/// `RwLock` for safe concurrent access and cloned on read. The ordered map
/// gives scans their ascending key order directly; a scan snapshots the
/// entries under the read lock and then iterates without holding it, so an
/// open scan observes none of the writes made after it was opened.
pub struct InMemoryLedger {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryLedger {
    /// Create a new empty in-memory ledger.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let map = self.entries.read().map_err(|_| LedgerError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> LedgerResult<()> {
        let mut map = self.entries.write().map_err(|_| LedgerError::Poisoned)?;
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> LedgerResult<()> {
        let mut map = self.entries.write().map_err(|_| LedgerError::Poisoned)?;
        map.remove(key);
        Ok(())
    }

    fn scan_all(&self) -> LedgerResult<KeyScan<'_>> {
        let map = self.entries.read().map_err(|_| LedgerError::Poisoned)?;
        let snapshot: Vec<(String, Vec<u8>)> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}

impl std::fmt::Debug for InMemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedger")
            .field("entry_count", &self.len())
            .finish()
    }
}
