//! Uniform response envelope shared by success and failure paths.
//!
//! # Responsibility
//! - Assemble the `{code, message, date, data?, errors?}` body a transport
//!   layer serializes for every operation.
//!
//! # Invariants
//! - Success envelopes never carry `errors`; failure envelopes never carry
//!   `data`.
//! - `date` is an ISO-8601 UTC timestamp.

use crate::service::BusinessError;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Success catalogue consumed by envelope construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    TechnologyCreated,
    TechnologiesFound,
    RelationsCreated,
    TechnologiesByCapabilitiesFound,
    RelationsDeleted,
}

impl StatusMessage {
    /// Wire code used in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TechnologyCreated => "201",
            Self::TechnologiesFound => "200",
            Self::RelationsCreated => "201-1",
            Self::TechnologiesByCapabilitiesFound => "200",
            Self::RelationsDeleted => "200",
        }
    }

    /// Client-facing message used in the response envelope.
    pub fn message(&self) -> &'static str {
        match self {
            Self::TechnologyCreated => "Technology created successfully",
            Self::TechnologiesFound => "Technologies found",
            Self::RelationsCreated => "Relations created successfully",
            Self::TechnologiesByCapabilitiesFound => "Technologies by capabilities found",
            Self::RelationsDeleted => "Technologies and relations deleted successfully",
        }
    }

    /// HTTP status a transport layer would answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::TechnologyCreated | Self::RelationsCreated => 201,
            _ => 200,
        }
    }
}

/// One entry of a failure envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub param: String,
}

/// Uniform response body for success and failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: String,
    pub message: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorBody>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Builds a success envelope carrying `data`.
    pub fn success(status: StatusMessage, data: T) -> Self {
        Self {
            code: status.code().to_string(),
            message: status.message().to_string(),
            date: now_iso8601(),
            data: Some(data),
            errors: None,
        }
    }

    /// Builds a success envelope with an empty body.
    pub fn success_empty(status: StatusMessage) -> Self {
        Self {
            code: status.code().to_string(),
            message: status.message().to_string(),
            date: now_iso8601(),
            data: None,
            errors: None,
        }
    }

    /// Builds a failure envelope from one business error.
    pub fn failure(error: &BusinessError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            date: now_iso8601(),
            data: None,
            errors: Some(vec![ErrorBody {
                code: error.code().to_string(),
                message: error.message().to_string(),
                param: String::new(),
            }]),
        }
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
