//! Entity repositories over the tabular store.
//!
//! # Responsibility
//! - Define the fetch contract shared by every entity kind.
//! - Bind credentials, default table queries and normalizers per kind.
//!
//! # Invariants
//! - Missing credentials fail with `LookbookError::Configuration` before any
//!   request is sent.
//! - Every fetch returns freshly normalized entities; nothing is cached.

pub mod entity_repo;
