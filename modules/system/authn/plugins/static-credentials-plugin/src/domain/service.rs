//! Credential checker for the static credentials plugin.

use authn_sdk::{AuthenticationRequest, AuthenticationResponse, UserDetails};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::{DEFAULT_IDENTITY, DEFAULT_SECRET, StaticCredentialsPluginConfig};

/// Accepts exactly one identity/secret pair.
///
/// Matching is exact and case-sensitive. Any other input, including empty
/// strings and absent fields, yields a failure. The checker holds no mutable
/// state, so it can be shared freely across tasks.
pub struct CredentialChecker {
    identity: String,
    secret: SecretString,
    authorities: Vec<String>,
}

impl Default for CredentialChecker {
    /// The fixed `user` / `password` pair with no authorities.
    fn default() -> Self {
        Self {
            identity: DEFAULT_IDENTITY.to_owned(),
            secret: SecretString::from(DEFAULT_SECRET.to_owned()),
            authorities: Vec::new(),
        }
    }
}

impl CredentialChecker {
    /// Create a checker from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticCredentialsPluginConfig) -> Self {
        Self {
            identity: cfg.identity.clone(),
            secret: cfg.secret.clone(),
            authorities: cfg.authorities.clone(),
        }
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Check one identity/secret pair.
    #[must_use]
    pub fn check(&self, identity: &str, secret: &str) -> AuthenticationResponse {
        if identity == self.identity && secret == self.secret.expose_secret() {
            debug!(identity, "Static credentials accepted");
            UserDetails::new(self.identity.clone())
                .with_authorities(self.authorities.iter().cloned())
                .into()
        } else {
            debug!(identity, "Static credentials rejected");
            AuthenticationResponse::failed()
        }
    }

    /// Check a request. An absent identity or secret never matches.
    #[must_use]
    pub fn check_request(&self, request: &AuthenticationRequest) -> AuthenticationResponse {
        match (request.identity(), request.secret()) {
            (Some(identity), Some(secret)) => self.check(identity, secret.expose_secret()),
            _ => {
                debug!("Static credentials rejected: incomplete request");
                AuthenticationResponse::failed()
            }
        }
    }
}
