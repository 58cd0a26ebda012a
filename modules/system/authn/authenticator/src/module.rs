//! Provider module contract and bootstrap.

use std::sync::Arc;

use anyhow::Context as _;
use async_trait::async_trait;
use tracing::info;

use crate::config::AuthenticatorConfig;
use crate::context::{ConfigProvider, ProviderCtx};
use crate::domain::Authenticator;
use crate::registry::ProviderRegistry;

/// Name of the authenticator's own configuration section.
pub const AUTHENTICATOR_MODULE: &str = "authenticator";

/// A unit that may contribute an authentication provider.
///
/// `init` reads the module's configuration, evaluates its activation rule
/// and, when active, registers its provider in `ctx.registry()`.
#[async_trait]
pub trait ProviderModule: Send + Sync {
    /// Configuration section name.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns an error if the module configuration is invalid.
    async fn init(&self, ctx: &ProviderCtx) -> anyhow::Result<()>;
}

/// Link-time registration of a [`ProviderModule`].
///
/// ```ignore
/// inventory::submit! {
///     ProviderModuleRegistration {
///         constructor: || Box::new(MyPlugin::default()),
///     }
/// }
/// ```
pub struct ProviderModuleRegistration {
    pub constructor: fn() -> Box<dyn ProviderModule>,
}

inventory::collect!(ProviderModuleRegistration);

/// Initialize every provider module linked into the binary and build the
/// authenticator over the resulting registry.
///
/// # Errors
///
/// Returns an error if the authenticator or any module configuration is invalid.
pub async fn bootstrap(config: Arc<dyn ConfigProvider>) -> anyhow::Result<Arc<Authenticator>> {
    let modules = inventory::iter::<ProviderModuleRegistration>
        .into_iter()
        .map(|reg| (reg.constructor)())
        .collect();

    bootstrap_modules(config, modules).await
}

/// Same as [`bootstrap`] with an explicit module list.
///
/// Modules are initialized in name order so registration is deterministic.
///
/// # Errors
///
/// Returns an error if the authenticator or any module configuration is invalid.
#[tracing::instrument(skip_all, fields(module_count = modules.len()))]
pub async fn bootstrap_modules(
    config: Arc<dyn ConfigProvider>,
    mut modules: Vec<Box<dyn ProviderModule>>,
) -> anyhow::Result<Arc<Authenticator>> {
    let registry = Arc::new(ProviderRegistry::new());

    let own_ctx = ProviderCtx::new(AUTHENTICATOR_MODULE, Arc::clone(&config), Arc::clone(&registry));
    let cfg: AuthenticatorConfig = own_ctx.config()?;
    info!(strategy = %cfg.strategy, "Initializing authenticator");

    modules.sort_by_key(|m| m.name());
    for module in modules {
        let name = module.name();
        let ctx = ProviderCtx::new(name, Arc::clone(&config), Arc::clone(&registry));
        module
            .init(&ctx)
            .await
            .with_context(|| format!("failed to initialize provider module '{name}'"))?;
    }

    info!(provider_count = registry.len(), "Authenticator initialized");
    Ok(Arc::new(Authenticator::new(registry, cfg.strategy)))
}
