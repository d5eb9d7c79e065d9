//! Core use-case services and the shared business-error taxonomy.
//!
//! # Responsibility
//! - Orchestrate validation rules and store calls into use-case APIs.
//! - Map every failure to exactly one typed business reason.
//!
//! # Invariants
//! - Service APIs never bypass validation or store contracts.
//! - Any failure aborts the whole call; batches are never partially applied.

use crate::repo::technology_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod capability_technology_service;
pub mod technology_service;
pub mod validation;

pub type ServiceResult<T> = Result<T, BusinessError>;

/// One variant per business failure the services can surface.
///
/// `code()` values follow the wire catalogue consumed by existing clients;
/// everything except `Repo` maps to HTTP 400.
#[derive(Debug)]
pub enum BusinessError {
    /// A required field is absent or an id list is empty.
    InvalidParameters,
    /// Technology name exceeds 50 characters.
    NameTooLong,
    /// Technology description exceeds 90 characters.
    DescriptionTooLong,
    /// A create batch repeats a name.
    DuplicateNames,
    /// An associate request repeats a technology id.
    DuplicateTechnologyIds,
    /// A technology with the same name is already stored.
    TechnologyAlreadyExists,
    /// A referenced technology id is not stored.
    TechnologyNotFound,
    /// No link row references the requested capability id.
    CapabilityNotFound,
    /// The capability would end up with fewer than 3 technologies.
    TooFewAssociations,
    /// The capability would end up with more than 20 technologies.
    TooManyAssociations,
    /// An incoming technology id is already linked to the capability.
    AlreadyAssociated,
    /// A delete batch spans more than one capability.
    MultipleCapabilitiesRelated,
    /// Storage-level failure; surfaced as a generic internal error.
    Repo(RepoError),
}

impl BusinessError {
    /// Wire code used in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameters => "400",
            Self::NameTooLong => "404-1",
            Self::DescriptionTooLong => "404-2",
            Self::DuplicateNames => "404-3",
            Self::TooFewAssociations => "404-4",
            Self::TooManyAssociations => "404-5",
            Self::AlreadyAssociated => "404-6",
            Self::DuplicateTechnologyIds => "400-7",
            Self::TechnologyAlreadyExists => "400",
            Self::TechnologyNotFound => "400",
            Self::CapabilityNotFound => "400",
            Self::MultipleCapabilitiesRelated => "400-9",
            Self::Repo(_) => "500",
        }
    }

    /// Client-facing message used in the response envelope.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidParameters => "Bad parameters, please verify data",
            Self::NameTooLong => "The name must not exceed 50 characters",
            Self::DescriptionTooLong => "The description must not exceed 90 characters",
            Self::DuplicateNames => "Technology names in one batch must be distinct",
            Self::DuplicateTechnologyIds => "The request repeats the same technology ids",
            Self::TechnologyAlreadyExists => "The technology is already registered",
            Self::TechnologyNotFound => "Some of the technologies are not registered",
            Self::CapabilityNotFound => {
                "Some of the capabilities are not registered or have no technologies"
            }
            Self::TooFewAssociations => {
                "A capability must be associated with at least 3 technologies"
            }
            Self::TooManyAssociations => {
                "A capability cannot have more than 20 associated technologies"
            }
            Self::AlreadyAssociated => {
                "The technologies are already associated with this capability"
            }
            Self::MultipleCapabilitiesRelated => {
                "The technologies are related to more than one capability"
            }
            Self::Repo(_) => "Something went wrong, please try again",
        }
    }

    /// HTTP status a transport layer would answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Repo(_) => 500,
            _ => 400,
        }
    }
}

impl Display for BusinessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{}: {err}", self.message()),
            _ => f.write_str(self.message()),
        }
    }
}

impl Error for BusinessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BusinessError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
