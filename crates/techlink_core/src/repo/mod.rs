//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define store contracts for the two persistence boundaries: technology
//!   records and capability/technology links.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Bulk write paths run inside one transaction each.
//! - Repository APIs reject invalid persisted state instead of masking it.

pub mod capability_technology_repo;
pub mod technology_repo;
