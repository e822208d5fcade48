// crates/voidtrade-types/src/auth.rs
// ============================================================================
// Module: Authentication Payloads
// Description: Wire types for registration, login, and session identity.
// Purpose: Model the auth endpoint group's request and response bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Request and response bodies for `/auth/*`. Tokens are opaque bearer
//! strings; issuance and validation are server concerns.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Authenticated user profile.
///
/// # Invariants
/// - `is_admin` is absent for regular accounts on some server versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Whether the account has admin rights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Successful authentication payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    /// Authenticated user profile.
    pub user: User,
    /// Opaque bearer token.
    pub access_token: String,
    /// Token type reported by the server (always "Bearer" in practice).
    pub token_type: String,
}

/// Registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Password confirmation (must match `password`).
    pub password_confirmation: String,
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}
