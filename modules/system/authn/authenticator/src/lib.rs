//! Authenticator
//!
//! Collects authentication providers and routes authentication calls to
//! them according to the configured strategy.
//!
//! Providers are contributed by provider modules. Each module is linked into
//! the final binary, self-registers through `inventory`, and decides from
//! configuration (see [`ActivationConfig`]) whether to put its provider into
//! the [`ProviderRegistry`]. [`bootstrap`] runs that wiring and returns the
//! ready [`Authenticator`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod activation;
pub mod config;
pub mod context;
pub mod domain;
pub mod module;
pub mod registry;

pub use activation::{Activation, ActivationConfig, PropertyRequirement};
pub use config::{AuthenticationStrategy, AuthenticatorConfig};
pub use context::{ConfigProvider, JsonConfigProvider, ProviderCtx};
pub use domain::{Authenticator, AuthenticatorLocalClient, DomainError};
pub use module::{
    AUTHENTICATOR_MODULE, ProviderModule, ProviderModuleRegistration, bootstrap,
    bootstrap_modules,
};
pub use registry::{ProviderRegistry, RegisteredProvider};
