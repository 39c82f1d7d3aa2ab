//! Document digesting for the Cadastre registry.
//!
//! Provides SHA-1 hashing of title documents with lowercase hex rendering,
//! plus digest verification.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod hasher;

pub use hasher::{DocumentHasher, HasherError};
