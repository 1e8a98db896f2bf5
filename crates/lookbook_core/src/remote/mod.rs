//! Outbound HTTP clients for the tabular store and the text helper.
//!
//! # Responsibility
//! - Build authenticated requests and classify their failures.
//! - Keep the wire transport behind `HttpTransport` so callers can swap it.
//!
//! # Invariants
//! - No request is retried; recovery is always caller-initiated.
//! - Reads never mutate remote state; only `update_fields` writes.

pub mod airtable;
pub mod error;
pub mod exa;
pub mod transport;
