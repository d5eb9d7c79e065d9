//! Capability/technology link model.
//!
//! # Responsibility
//! - Represent one persisted association row between a capability id and a
//!   technology id.
//!
//! # Invariants
//! - `(capability_id, technology_id)` pairs are unique in storage.
//! - `capability_id` is a weak reference; capability existence is inferred
//!   from the presence of at least one link row, never verified upstream.

use crate::model::technology::{CapabilityId, TechnologyId};
use serde::{Deserialize, Serialize};

/// Persisted link row between one capability and one technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityTechnology {
    /// Storage-internal row id.
    pub id: i64,
    /// Externally-owned capability the technology is linked to.
    pub capability_id: CapabilityId,
    /// Technology that must exist in the technology table.
    pub technology_id: TechnologyId,
}
