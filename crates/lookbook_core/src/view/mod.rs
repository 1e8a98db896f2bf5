//! Presentation projections of normalized entities.
//!
//! # Responsibility
//! - Turn entities into display-ready cards shared by every list and detail
//!   surface.
//!
//! # Invariants
//! - Card projection is pure and never fails.

pub mod card;
