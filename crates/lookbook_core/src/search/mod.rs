//! In-memory lookup, facet and filter logic over loaded collections.
//!
//! # Responsibility
//! - Index collections by slug for detail lookups.
//! - Derive selectable facets (tags, dates) from loaded entities.
//! - Hold tag/date selections and apply them to a collection.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs; nothing performs I/O.

pub mod facets;
pub mod filter;
pub mod slug_index;
