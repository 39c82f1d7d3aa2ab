use crate::error::LedgerResult;

/// A lazily consumed scan over all live ledger entries.
///
/// Yields `(key, value)` pairs in ascending lexicographic key order. The
/// iterator owns whatever substrate resources back the scan and releases
/// them when dropped, whether it was exhausted or abandoned mid-way on an
/// error.
pub type KeyScan<'a> = Box<dyn Iterator<Item = LedgerResult<(String, Vec<u8>)>> + Send + 'a>;

/// Transactionally scoped ordered key-value ledger.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for an absent key; `Err` is reserved for
///   substrate failure (storage unavailable, conflict detected).
/// - `put` writes unconditionally; existence checks are the caller's job.
/// - Keys are enumerated by `scan_all` in ascending lexicographic order,
///   and every call opens a fresh, independent scan.
/// - Isolation between concurrent transactions is the substrate's
///   guarantee; implementations add no locking of their own beyond what
///   their internal data structures need.
pub trait Ledger: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// Remove the entry stored under `key`.
    fn delete(&self, key: &str) -> LedgerResult<()>;

    /// Open a scan over all live entries in ascending key order.
    fn scan_all(&self) -> LedgerResult<KeyScan<'_>>;
}
