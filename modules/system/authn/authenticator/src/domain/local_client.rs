//! Local (in-process) client for the authenticator.

use std::sync::Arc;

use async_trait::async_trait;
use authn_sdk::{AuthNClient, AuthNError, AuthenticationRequest, AuthenticationResponse};

use super::{Authenticator, DomainError};

/// Local client wrapping the authenticator.
pub struct AuthenticatorLocalClient {
    svc: Arc<Authenticator>,
}

impl AuthenticatorLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Authenticator>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> AuthNError {
    tracing::error!(operation = op, error = %e, "authenticator call failed");
    e.into()
}

#[async_trait]
impl AuthNClient for AuthenticatorLocalClient {
    async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthNError> {
        self.svc
            .authenticate(&request)
            .await
            .map_err(|e| log_and_convert("authenticate", e))
    }
}
