//! Domain errors for the authenticator.

use authn_sdk::AuthNError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no authentication provider registered")]
    NoProviderAvailable,

    #[error("provider '{provider}' failed: {source}")]
    ProviderFailed {
        provider: String,
        #[source]
        source: AuthNError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub(crate) fn provider_failed(provider: &str, source: AuthNError) -> Self {
        Self::ProviderFailed {
            provider: provider.to_owned(),
            source,
        }
    }
}

impl From<DomainError> for AuthNError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NoProviderAvailable => Self::NoProviderAvailable,
            DomainError::ProviderFailed { provider, source } => match source {
                AuthNError::NoProviderAvailable => Self::NoProviderAvailable,
                AuthNError::ProviderUnavailable(reason) => {
                    Self::ProviderUnavailable(format!("{provider}: {reason}"))
                }
                AuthNError::Internal(reason) => Self::Internal(format!("{provider}: {reason}")),
            },
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
