//! `AuthN` SDK
//!
//! This crate provides the public API shared by the authenticator and the
//! providers plugged into it:
//!
//! - [`AuthNClient`] - Public API trait for consumers
//! - [`AuthenticationProvider`] - Provider API trait for implementations
//! - [`AuthenticationRequest`] / [`AuthenticationResponse`] - Request and result models
//! - [`AuthNError`] - Infrastructure error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_sdk::{AuthNClient, AuthenticationRequest};
//!
//! let response = client
//!     .authenticate(AuthenticationRequest::new("user", "password"))
//!     .await?;
//! if let Some(user) = response.user_details() {
//!     println!("authenticated as {}", user.username());
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod provider_api;

// Re-export main types at crate root
pub use api::AuthNClient;
pub use error::AuthNError;
pub use models::{
    AuthenticationFailed, AuthenticationFailureReason, AuthenticationRequest,
    AuthenticationResponse, UserDetails,
};
pub use provider_api::AuthenticationProvider;
