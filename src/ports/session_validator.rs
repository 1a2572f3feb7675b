//! Session validation port for bearer token validation.
//!
//! This port defines the contract for validating access tokens and extracting
//! user identity. It is issuer-agnostic: the JWT adapter and the mock used in
//! tests both implement it.
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from the expected issuer
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the authenticated user.
    ///
    /// `token` is the raw token without the "Bearer " prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
