//! Domain layer for the authenticator.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::AuthenticatorLocalClient;
pub use service::Authenticator;
