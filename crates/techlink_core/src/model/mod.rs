//! Domain model for technologies and their capability links.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep request-input shapes separate from persisted records.
//!
//! # Invariants
//! - Persisted records always carry a storage-assigned id.
//! - Capability ids are weak references to an externally-owned system.

pub mod association;
pub mod technology;
