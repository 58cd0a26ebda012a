//! Error types for the `AuthN` SDK.

use thiserror::Error;

/// Errors that can occur when consulting authentication providers.
#[derive(Debug, Error)]
pub enum AuthNError {
    /// No provider is registered to handle the request.
    #[error("no authentication provider available")]
    NoProviderAvailable,

    /// A provider could not be consulted.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
