//! Public API trait for authentication.
//!
//! Consumers hold an `Arc<dyn AuthNClient>` and never talk to providers
//! directly. The authenticator implements this trait and fans the request
//! out to the registered providers.

use async_trait::async_trait;

use crate::error::AuthNError;
use crate::models::{AuthenticationRequest, AuthenticationResponse};

/// Public API trait for the authenticator.
///
/// ```ignore
/// let response = client
///     .authenticate(AuthenticationRequest::new("user", "password"))
///     .await?;
/// assert!(response.is_authenticated());
/// ```
#[async_trait]
pub trait AuthNClient: Send + Sync {
    /// Authenticate an identity/secret pair.
    ///
    /// Rejected credentials are not an error: they come back as
    /// [`AuthenticationResponse::Failure`].
    ///
    /// # Errors
    ///
    /// - `NoProviderAvailable` if no provider is registered
    /// - `ProviderUnavailable` if the providers could not be consulted
    /// - `Internal` for unexpected errors
    async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthNError>;
}
