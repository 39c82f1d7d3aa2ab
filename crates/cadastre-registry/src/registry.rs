use tracing::{debug, info};

use cadastre_crypto::DocumentHasher;
use cadastre_ledger::Ledger;
use cadastre_types::{LandTitle, TitleId};

use crate::error::{RegistryError, RegistryResult};

/// The land-title registry, operating against an injected [`Ledger`].
///
/// The ledger entry for an id is the sole source of truth: every operation
/// starts from a fresh `get`, and nothing is cached between calls. Per-key
/// write isolation between concurrent transactions is the substrate's
/// guarantee: when two creates race on one id, the substrate lets at most
/// one commit.
pub struct TitleRegistry<'a> {
    ledger: &'a dyn Ledger,
}

impl<'a> TitleRegistry<'a> {
    /// Create a registry over the given ledger.
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self { ledger }
    }

    /// Write the seed records unconditionally, overwriting any live record
    /// with the same id. Runs once at deployment.
    ///
    /// Aborts on the first failed write; records already written remain
    /// written (the substrate offers no multi-key rollback and none is
    /// simulated here).
    pub fn init_ledger(&self, seeds: &[LandTitle]) -> RegistryResult<()> {
        for title in seeds {
            let bytes = encode(title)?;
            self.ledger.put(title.id.as_str(), &bytes)?;
            debug!(id = %title.id, "seed record written");
        }
        info!(count = seeds.len(), "ledger initialized");
        Ok(())
    }

    /// Create a new land-title record.
    ///
    /// The document at `document_path` is read in full and digested; the
    /// digest is stored with the record as a creation-time attestation.
    /// Fails with [`RegistryError::AlreadyExists`] if the id holds a live
    /// record; create never overwrites. Failure at any step before the
    /// final write leaves the ledger untouched.
    pub fn create(
        &self,
        id: impl Into<TitleId>,
        owner: impl Into<String>,
        official_number: impl Into<String>,
        area_square_meters: u64,
        document_path: impl Into<String>,
    ) -> RegistryResult<()> {
        let id = id.into();
        if self.ledger.get(id.as_str())?.is_some() {
            return Err(RegistryError::AlreadyExists(id));
        }

        let document_path = document_path.into();
        let document_digest = DocumentHasher::digest_file(&document_path)
            .map_err(|source| RegistryError::Document {
                id: id.clone(),
                source,
            })?;

        let title = LandTitle::new(
            id,
            owner,
            official_number,
            area_square_meters,
            document_path,
            document_digest,
        );
        let bytes = encode(&title)?;
        self.ledger.put(title.id.as_str(), &bytes)?;
        debug!(id = %title.id, digest = %title.document_digest, "title created");
        Ok(())
    }

    /// Read the record stored under `id`.
    ///
    /// Returns an owned copy; the stored digest is not re-verified against
    /// the live document.
    pub fn read(&self, id: &TitleId) -> RegistryResult<LandTitle> {
        let bytes = self
            .ledger
            .get(id.as_str())?
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        decode(id, &bytes)
    }

    /// Replace the owner of the record stored under `id`.
    ///
    /// A pure read-modify-write on `owner`: every other field, the document
    /// digest included, is written back bit-identical.
    pub fn update_owner(&self, id: &TitleId, new_owner: impl Into<String>) -> RegistryResult<()> {
        let mut title = self.read(id)?;
        title.owner = new_owner.into();
        let bytes = encode(&title)?;
        self.ledger.put(id.as_str(), &bytes)?;
        debug!(id = %id, "owner updated");
        Ok(())
    }

    /// Delete the record stored under `id`.
    pub fn delete(&self, id: &TitleId) -> RegistryResult<()> {
        if self.ledger.get(id.as_str())?.is_none() {
            return Err(RegistryError::NotFound(id.clone()));
        }
        self.ledger.delete(id.as_str())?;
        debug!(id = %id, "title deleted");
        Ok(())
    }

    /// Enumerate every record, in ascending id order.
    ///
    /// Order is a function of key order alone, never of any business field.
    /// The first entry that fails to deserialize fails the whole operation;
    /// there is no skip-and-continue.
    pub fn list_all(&self) -> RegistryResult<Vec<LandTitle>> {
        let scan = self.ledger.scan_all()?;
        let mut titles = Vec::new();
        for entry in scan {
            let (key, bytes) = entry?;
            let id = TitleId::from(key);
            titles.push(decode(&id, &bytes)?);
        }
        Ok(titles)
    }
}

fn encode(title: &LandTitle) -> RegistryResult<Vec<u8>> {
    serde_json::to_vec(title).map_err(|e| RegistryError::Serialization {
        id: title.id.clone(),
        reason: e.to_string(),
    })
}

fn decode(id: &TitleId, bytes: &[u8]) -> RegistryResult<LandTitle> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::Serialization {
        id: id.clone(),
        reason: e.to_string(),
    })
}
