//! Use-case services composed from repositories and remote clients.
//!
//! # Responsibility
//! - Own loading/error/empty states for directory views.
//! - Resolve company detail pages including their founders.
//! - Expose the feedback toggle and description generation use-cases.
//!
//! # Invariants
//! - Errors are converted into a single view-level failure; nothing panics
//!   and nothing is retried automatically.

pub mod company_service;
pub mod description_service;
pub mod directory_service;
pub mod feedback_service;
