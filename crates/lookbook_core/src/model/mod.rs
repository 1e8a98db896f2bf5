//! Directory domain model for mentor/founder/company listings.
//!
//! # Responsibility
//! - Define the raw record shape returned by the tabular store.
//! - Define the three normalized entity shapes rendered by views.
//!
//! # Invariants
//! - Entities are rebuilt from raw records on every fetch; nothing is merged
//!   across fetches.
//! - `lookbook_tag` only ever holds `Investor` or `Operator`.

pub mod entity;
pub mod record;
