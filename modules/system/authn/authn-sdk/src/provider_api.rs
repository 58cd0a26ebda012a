//! Provider API trait for authentication implementations.
//!
//! Providers implement this trait and register themselves in the
//! authenticator's provider registry.

use async_trait::async_trait;

use crate::error::AuthNError;
use crate::models::{AuthenticationRequest, AuthenticationResponse};

/// Provider API trait.
///
/// Produces exactly one response per request. Implementations with no
/// asynchronous work simply return their synchronous result.
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Check the request and return the outcome.
    ///
    /// # Errors
    ///
    /// - `ProviderUnavailable` if a backing store cannot be reached
    /// - `Internal` for unexpected errors
    ///
    /// Mismatched credentials are reported as
    /// [`AuthenticationResponse::Failure`], never as an error.
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthNError>;
}
