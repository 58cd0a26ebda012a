//! Provider implementation for the static credentials plugin.
//!
//! Implements `AuthenticationProvider` using the credential checker.

use async_trait::async_trait;
use authn_sdk::{AuthNError, AuthenticationProvider, AuthenticationRequest, AuthenticationResponse};

use super::service::CredentialChecker;

#[async_trait]
impl AuthenticationProvider for CredentialChecker {
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthNError> {
        Ok(self.check_request(request))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn provider_trait_accepts_fixed_pair() {
        let checker = CredentialChecker::default();
        let provider: &dyn AuthenticationProvider = &checker;

        let response = provider
            .authenticate(&AuthenticationRequest::new("user", "password"))
            .await
            .unwrap();

        let user = response.user_details().unwrap();
        assert_eq!(user.username(), "user");
        assert!(user.authorities().is_empty());
    }

    #[tokio::test]
    async fn provider_trait_rejects_as_value_not_error() {
        let checker = CredentialChecker::default();
        let provider: &dyn AuthenticationProvider = &checker;

        let result = provider
            .authenticate(&AuthenticationRequest::new("user", "wrong"))
            .await;

        match result {
            Ok(AuthenticationResponse::Failure(_)) => {}
            other => panic!("Expected Ok(Failure), got: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_calls_agree() {
        let checker = Arc::new(CredentialChecker::default());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let checker = Arc::clone(&checker);
                tokio::spawn(async move {
                    let secret = if i % 2 == 0 { "password" } else { "nope" };
                    let response = checker
                        .authenticate(&AuthenticationRequest::new("user", secret))
                        .await
                        .unwrap();
                    (i, response.is_authenticated())
                })
            })
            .collect();

        for handle in handles {
            let (i, authenticated) = handle.await.unwrap();
            assert_eq!(authenticated, i % 2 == 0);
        }
    }
}
