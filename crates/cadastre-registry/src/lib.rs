//! Land-title registry logic for Cadastre.
//!
//! This crate is the heart of the system. It provides:
//! - [`TitleRegistry`] — the six registry operations (initialize, create,
//!   read, update-owner, delete, list-all) expressed against the abstract
//!   [`Ledger`](cadastre_ledger::Ledger) boundary
//! - [`seed_titles`] — the fixed deployment seed set
//! - [`RegistryError`] — the operation error taxonomy
//!
//! Each operation runs synchronously to completion within the transaction
//! context the host substrate supplies; the registry adds no locking,
//! retries, or caching of its own. Records are stored as flat JSON keyed by
//! title id, so enumeration order is ascending id order.

pub mod error;
pub mod registry;
pub mod seed;

pub use error::{RegistryError, RegistryResult};
pub use registry::TitleRegistry;
pub use seed::seed_titles;
