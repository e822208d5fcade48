// crates/voidtrade-types/src/envelope.rs
// ============================================================================
// Module: API Response Envelope
// Description: Wire envelope carried by every Voidtrade API response.
// Purpose: Model the {success, data, error, meta} contract and its typed split.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every API call returns the same envelope: a `success` flag, an optional
//! `data` payload, an optional `error` payload, and request metadata. The wire
//! shape allows contradictory field combinations, so [`ApiResponse::into_outcome`]
//! converts it into [`ApiOutcome`], a tagged union where exactly one of
//! data/error exists. Server payloads are untrusted input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Error code synthesized when a request exceeds its client-side deadline.
pub const CODE_TIMEOUT: &str = "TIMEOUT";

/// Error code synthesized for transport-level failures caught locally.
pub const CODE_NETWORK_ERROR: &str = "NETWORK_ERROR";

/// Error code synthesized when a failed envelope carries no error payload.
pub const CODE_UNKNOWN: &str = "UNKNOWN";

// ============================================================================
// SECTION: Envelope Types
// ============================================================================

/// Request metadata attached to every envelope.
///
/// # Invariants
/// - `request_id` is empty for client-synthesized envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Server timestamp in RFC 3339 form (or client time for synthesized envelopes).
    #[serde(default)]
    pub timestamp: String,
    /// Server-assigned request identifier.
    #[serde(default)]
    pub request_id: String,
}

impl ResponseMeta {
    /// Builds metadata for a client-synthesized envelope.
    #[must_use]
    pub const fn synthesized(timestamp: String) -> Self {
        Self {
            timestamp,
            request_id: String::new(),
        }
    }
}

/// Structured error payload carried by failed envelopes.
///
/// # Invariants
/// - `code` is matched by literal string; unrecognized codes fall back to `message`.
/// - All fields are untrusted server text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional per-field validation details.
    #[serde(default)]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// Builds an error payload with no validation details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Wire envelope returned by every API endpoint.
///
/// # Invariants
/// - By convention `success = false` implies `error` is populated; the type
///   does not enforce it. Use [`ApiResponse::into_outcome`] for a total split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server reports the call as successful.
    pub success: bool,
    /// Payload present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional free-text message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error payload present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Request metadata.
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around a payload.
    #[must_use]
    pub const fn ok(data: T, meta: ResponseMeta) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            meta,
        }
    }

    /// Builds a failed envelope around an error payload.
    #[must_use]
    pub const fn failed(error: ApiError, meta: ResponseMeta) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error),
            meta,
        }
    }

    /// Builds the client-synthesized timeout envelope.
    #[must_use]
    pub fn timeout(timestamp: String) -> Self {
        Self::failed(
            ApiError::new(CODE_TIMEOUT, "Request timed out"),
            ResponseMeta::synthesized(timestamp),
        )
    }

    /// Builds the client-synthesized network-error envelope.
    #[must_use]
    pub fn network_error(message: impl Into<String>, timestamp: String) -> Self {
        Self::failed(
            ApiError::new(CODE_NETWORK_ERROR, message),
            ResponseMeta::synthesized(timestamp),
        )
    }

    /// Splits the loose envelope into a tagged success/failure union.
    ///
    /// A failed envelope without an `error` payload synthesizes an
    /// [`CODE_UNKNOWN`] error from the envelope `message` so downstream code
    /// never sees a contradictory state. A "successful" envelope without a
    /// payload is treated as a failure for the same reason.
    #[must_use]
    pub fn into_outcome(self) -> ApiOutcome<T> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => ApiOutcome::Success {
                data,
                meta: self.meta,
            },
            (_, _, Some(error)) => ApiOutcome::Failure {
                error,
                meta: self.meta,
            },
            (_, _, None) => ApiOutcome::Failure {
                error: ApiError::new(
                    CODE_UNKNOWN,
                    self.message.unwrap_or_else(|| "Unknown error".to_string()),
                ),
                meta: self.meta,
            },
        }
    }

    /// Returns the error code when the envelope carries one.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.code.as_str())
    }
}

// ============================================================================
// SECTION: Outcome Union
// ============================================================================

/// Tagged success/failure view of an [`ApiResponse`].
///
/// # Invariants
/// - Exactly one of the payload/error variants exists; contradictory wire
///   states are resolved by [`ApiResponse::into_outcome`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    /// Successful call with a payload.
    Success {
        /// Response payload.
        data: T,
        /// Request metadata.
        meta: ResponseMeta,
    },
    /// Failed call with an error payload.
    Failure {
        /// Error payload (synthesized when the wire omitted it).
        error: ApiError,
        /// Request metadata.
        meta: ResponseMeta,
    },
}

impl<T> ApiOutcome<T> {
    /// Returns the payload when the outcome is successful.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success {
                data, ..
            } => Some(data),
            Self::Failure {
                ..
            } => None,
        }
    }

    /// Returns the error payload when the outcome is a failure.
    #[must_use]
    pub fn failure(self) -> Option<ApiError> {
        match self {
            Self::Success {
                ..
            } => None,
            Self::Failure {
                error, ..
            } => Some(error),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use super::*;

    #[test]
    fn outcome_splits_success() {
        let envelope: ApiResponse<u32> = ApiResponse::ok(7, ResponseMeta::default());
        assert_eq!(envelope.into_outcome().success(), Some(7));
    }

    #[test]
    fn outcome_synthesizes_unknown_error() {
        let envelope: ApiResponse<u32> = ApiResponse {
            success: false,
            data: None,
            message: Some("boom".to_string()),
            error: None,
            meta: ResponseMeta::default(),
        };
        let error = envelope.into_outcome().failure().unwrap();
        assert_eq!(error.code, CODE_UNKNOWN);
        assert_eq!(error.message, "boom");
    }

    #[test]
    fn outcome_treats_missing_data_as_failure() {
        let envelope: ApiResponse<u32> = ApiResponse {
            success: true,
            data: None,
            message: None,
            error: None,
            meta: ResponseMeta::default(),
        };
        assert!(envelope.into_outcome().failure().is_some());
    }

    #[test]
    fn timeout_envelope_has_stable_code() {
        let envelope: ApiResponse<u32> = ApiResponse::timeout("2026-01-01T00:00:00Z".to_string());
        assert!(!envelope.success);
        assert_eq!(envelope.error_code(), Some(CODE_TIMEOUT));
        assert!(envelope.meta.request_id.is_empty());
    }

    #[test]
    fn envelope_deserializes_without_optional_fields() {
        let raw = r#"{"success":true,"data":42,"meta":{"timestamp":"t","request_id":"r"}}"#;
        let envelope: ApiResponse<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data, Some(42));
        assert_eq!(envelope.meta.request_id, "r");
    }
}
