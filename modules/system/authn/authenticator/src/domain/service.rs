//! Domain service for the authenticator.

use std::sync::Arc;

use authn_sdk::{AuthenticationFailed, AuthenticationRequest, AuthenticationResponse, UserDetails};
use tracing::{debug, warn};

use super::error::DomainError;
use crate::config::AuthenticationStrategy;
use crate::registry::{ProviderRegistry, RegisteredProvider};

/// Routes authentication requests to the registered providers.
pub struct Authenticator {
    registry: Arc<ProviderRegistry>,
    strategy: AuthenticationStrategy,
}

impl Authenticator {
    #[must_use]
    pub fn new(registry: Arc<ProviderRegistry>, strategy: AuthenticationStrategy) -> Self {
        Self { registry, strategy }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn strategy(&self) -> AuthenticationStrategy {
        self.strategy
    }

    /// Authenticate a request against the registered providers.
    ///
    /// # Errors
    ///
    /// - `NoProviderAvailable` if the registry is empty
    /// - `ProviderFailed` if providers errored instead of answering (see strategy)
    #[tracing::instrument(skip_all, fields(strategy = %self.strategy, identity = request.identity().unwrap_or_default()))]
    pub async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, DomainError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(DomainError::NoProviderAvailable);
        }

        match self.strategy {
            AuthenticationStrategy::Any => authenticate_any(&providers, request).await,
            AuthenticationStrategy::All => authenticate_all(&providers, request).await,
        }
    }
}

async fn authenticate_any(
    providers: &[RegisteredProvider],
    request: &AuthenticationRequest,
) -> Result<AuthenticationResponse, DomainError> {
    let mut last_failure: Option<AuthenticationFailed> = None;
    let mut last_error: Option<DomainError> = None;

    for entry in providers {
        match entry.provider().authenticate(request).await {
            Ok(AuthenticationResponse::Success(user)) => {
                debug!(provider = entry.name(), username = user.username(), "Authenticated");
                return Ok(AuthenticationResponse::Success(user));
            }
            Ok(AuthenticationResponse::Failure(failed)) => {
                debug!(provider = entry.name(), reason = %failed.reason(), "Provider rejected credentials");
                last_failure = Some(failed);
            }
            Err(e) => {
                warn!(provider = entry.name(), error = %e, "Provider failed, trying next");
                last_error = Some(DomainError::provider_failed(entry.name(), e));
            }
        }
    }

    match (last_failure, last_error) {
        (Some(failed), _) => Ok(AuthenticationResponse::Failure(failed)),
        (None, Some(err)) => Err(err),
        (None, None) => Err(DomainError::Internal(
            "no provider consulted under strategy 'any'".to_owned(),
        )),
    }
}

async fn authenticate_all(
    providers: &[RegisteredProvider],
    request: &AuthenticationRequest,
) -> Result<AuthenticationResponse, DomainError> {
    let mut last_success: Option<UserDetails> = None;

    for entry in providers {
        let response = entry
            .provider()
            .authenticate(request)
            .await
            .map_err(|e| DomainError::provider_failed(entry.name(), e))?;

        match response {
            AuthenticationResponse::Success(user) => last_success = Some(user),
            AuthenticationResponse::Failure(failed) => {
                debug!(provider = entry.name(), reason = %failed.reason(), "Provider rejected credentials");
                return Ok(AuthenticationResponse::Failure(failed));
            }
        }
    }

    last_success.map(AuthenticationResponse::Success).ok_or_else(|| {
        DomainError::Internal("no provider consulted under strategy 'all'".to_owned())
    })
}
