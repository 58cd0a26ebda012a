#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Credentials Plugin
//!
//! Authentication provider that accepts exactly one identity/secret pair and
//! grants a fixed authority set. It is a test double: out of the box it
//! accepts `user` / `password` and grants no authorities.
//!
//! The provider is only registered when its activation rule holds. By default
//! that requires the `spec.name` property to be `rsajwtgateway`, so the stub
//! stays out of any configuration that does not ask for it.
//!
//! ## Configuration
//!
//! ```yaml
//! spec:
//!   name: rsajwtgateway
//! modules:
//!   static_credentials_plugin:
//!     config:
//!       priority: 100
//!       activation:
//!         enabled: true
//!         requires:
//!           - property: spec.name
//!             value: rsajwtgateway
//!       identity: user
//!       secret: password
//!       authorities: []
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use domain::CredentialChecker;
pub use module::StaticCredentialsPlugin;
