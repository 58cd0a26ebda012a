//! Domain layer for the static credentials plugin.

mod client;
pub mod service;

pub use service::CredentialChecker;
