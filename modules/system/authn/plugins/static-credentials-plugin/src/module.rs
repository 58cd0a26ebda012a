//! Static credentials plugin module.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use authn_authenticator::{Activation, ProviderCtx, ProviderModule, ProviderModuleRegistration};
use authn_sdk::AuthenticationProvider;
use tracing::{info, warn};

use crate::config::StaticCredentialsPluginConfig;
use crate::domain::CredentialChecker;

/// Provider name in the registry.
pub const PROVIDER_NAME: &str = "static-credentials";

/// Static credentials plugin module.
///
/// Registers a [`CredentialChecker`] in the provider registry when the
/// configured activation rule holds.
pub struct StaticCredentialsPlugin {
    checker: OnceLock<Arc<CredentialChecker>>,
}

impl Default for StaticCredentialsPlugin {
    fn default() -> Self {
        Self {
            checker: OnceLock::new(),
        }
    }
}

impl StaticCredentialsPlugin {
    /// The checker, once `init` registered it.
    #[must_use]
    pub fn checker(&self) -> Option<&Arc<CredentialChecker>> {
        self.checker.get()
    }
}

inventory::submit! {
    ProviderModuleRegistration {
        constructor: || Box::new(StaticCredentialsPlugin::default()),
    }
}

#[async_trait]
impl ProviderModule for StaticCredentialsPlugin {
    fn name(&self) -> &'static str {
        "static_credentials_plugin"
    }

    async fn init(&self, ctx: &ProviderCtx) -> anyhow::Result<()> {
        info!("Initializing static_credentials_plugin");

        let cfg: StaticCredentialsPluginConfig = ctx.config()?;

        match cfg.activation.evaluate(ctx.config_provider()) {
            Activation::Active => {}
            Activation::Disabled => {
                info!("Static credentials plugin disabled, not registering provider");
                return Ok(());
            }
            Activation::Unmet {
                property,
                expected,
                actual,
            } => {
                info!(
                    %property,
                    %expected,
                    actual = actual.as_deref().unwrap_or("<unset>"),
                    "Static credentials plugin activation requirement not met, not registering provider"
                );
                return Ok(());
            }
        }

        warn!(
            identity = %cfg.identity,
            "Static credentials plugin is active: a hardcoded identity/secret pair will be accepted. \
             Do NOT use this in production."
        );
        info!(
            priority = cfg.priority,
            authority_count = cfg.authorities.len(),
            "Loaded plugin configuration"
        );

        let checker = Arc::new(CredentialChecker::from_config(&cfg));
        self.checker
            .set(checker.clone())
            .map_err(|_| anyhow::anyhow!("Checker already initialized"))?;

        let api: Arc<dyn AuthenticationProvider> = checker;
        ctx.registry().register(PROVIDER_NAME, cfg.priority, api);

        info!(provider = PROVIDER_NAME, "Static credentials plugin initialized");
        Ok(())
    }
}
