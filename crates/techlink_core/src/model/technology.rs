//! Technology domain model.
//!
//! # Responsibility
//! - Define the persisted technology record and its creation inputs.
//!
//! # Invariants
//! - `id` is assigned by storage on insert; drafts never carry one.
//! - `name` is unique across all technologies (case-sensitive).

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier for a technology row.
pub type TechnologyId = i64;

/// Identifier of an externally-owned capability.
///
/// Kept as a type alias: this system never materializes capability records,
/// it only stores links that reference their ids.
pub type CapabilityId = i64;

/// Persisted technology record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    /// Storage-assigned row id.
    pub id: TechnologyId,
    /// Unique display name, at most 50 characters.
    pub name: String,
    /// Short description, at most 90 characters.
    pub description: String,
}

/// Raw creation input as submitted by a caller.
///
/// Both fields are optional to mirror request payloads where either may be
/// absent; `validation::check_required_fields` turns a draft into a
/// [`NewTechnology`] or rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TechnologyDraft {
    /// Creates a draft with both fields present.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

/// Validated creation input, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnology {
    pub name: String,
    pub description: String,
}
