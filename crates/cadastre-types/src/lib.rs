//! Foundation types for the Cadastre land-title registry.
//!
//! This crate provides the record schema and identifier types used
//! throughout the Cadastre system. Every other Cadastre crate depends on
//! `cadastre-types`.
//!
//! # Key Types
//!
//! - [`TitleId`] — Unique title identifier, doubling as the ledger key
//! - [`DocumentDigest`] — Validated lowercase-hex SHA-1 digest of a title document
//! - [`LandTitle`] — The land-title record, the unit of storage

pub mod digest;
pub mod error;
pub mod title;

pub use digest::DocumentDigest;
pub use error::TypeError;
pub use title::{LandTitle, TitleId};
