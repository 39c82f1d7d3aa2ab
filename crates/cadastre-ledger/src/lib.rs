//! Ordered key-value ledger boundary for the Cadastre registry.
//!
//! The registry never talks to a ledger substrate directly. It goes through
//! the [`Ledger`] trait: four operations (get, put, delete, full-range
//! scan), each scoped to whatever transaction context the host substrate
//! supplies. This keeps the registry substrate-agnostic and unit-testable.
//!
//! # Design Rules
//!
//! 1. The ledger entry is the sole source of truth; no caching layer sits
//!    in front of it.
//! 2. `get` distinguishes "absent" (`Ok(None)`) from substrate failure.
//! 3. Scans enumerate all live entries in ascending lexicographic key
//!    order; each scan is an independent, lazily consumed resource.
//! 4. Transaction isolation and conflicting-write detection belong to the
//!    substrate, never to implementations of this trait.
//! 5. All substrate errors are propagated, never silently ignored.
//!
//! [`InMemoryLedger`] is the `BTreeMap`-backed implementation used by tests
//! and embeddings; a production binding adapts the host substrate's
//! transaction context to the same trait.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use memory::InMemoryLedger;
pub use traits::{KeyScan, Ledger};
