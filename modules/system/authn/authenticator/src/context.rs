//! Configuration access for provider modules.

use std::sync::Arc;

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::registry::ProviderRegistry;

/// Source of module configuration and global properties.
pub trait ConfigProvider: Send + Sync {
    /// Configuration section of a module, if present.
    fn module_config(&self, module: &str) -> Option<&Value>;

    /// String property addressed by a dotted path, e.g. `spec.name`.
    fn property(&self, key: &str) -> Option<&str>;
}

/// [`ConfigProvider`] backed by a single JSON tree.
///
/// Module sections are read from `modules.<name>.config`. Properties are
/// looked up by dotted path from the root; only string values count.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigProvider {
    root: Value,
}

impl JsonConfigProvider {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl ConfigProvider for JsonConfigProvider {
    fn module_config(&self, module: &str) -> Option<&Value> {
        self.root.get("modules")?.get(module)?.get("config")
    }

    fn property(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))?
            .as_str()
    }
}

/// Per-module view handed to [`crate::ProviderModule::init`].
pub struct ProviderCtx {
    module: &'static str,
    config: Arc<dyn ConfigProvider>,
    registry: Arc<ProviderRegistry>,
}

impl ProviderCtx {
    #[must_use]
    pub fn new(
        module: &'static str,
        config: Arc<dyn ConfigProvider>,
        registry: Arc<ProviderRegistry>,
    ) -> Self {
        Self {
            module,
            config,
            registry,
        }
    }

    #[must_use]
    pub fn module_name(&self) -> &'static str {
        self.module
    }

    /// Deserialize this module's configuration section.
    ///
    /// A missing section yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section exists but does not match `T`.
    pub fn config<T>(&self) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.config.module_config(self.module) {
            Some(section) => serde_json::from_value(section.clone())
                .with_context(|| format!("invalid configuration for module '{}'", self.module)),
            None => Ok(T::default()),
        }
    }

    #[must_use]
    pub fn config_provider(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, deny_unknown_fields)]
    struct SampleConfig {
        priority: i16,
    }

    fn ctx(root: Value, module: &'static str) -> ProviderCtx {
        ProviderCtx::new(
            module,
            Arc::new(JsonConfigProvider::new(root)),
            Arc::new(ProviderRegistry::new()),
        )
    }

    #[test]
    fn property_follows_dotted_path() {
        let provider = JsonConfigProvider::new(json!({ "spec": { "name": "rsajwtgateway" } }));

        assert_eq!(provider.property("spec.name"), Some("rsajwtgateway"));
        assert_eq!(provider.property("spec.missing"), None);
        assert_eq!(provider.property("spec"), None);
    }

    #[test]
    fn non_string_property_is_absent() {
        let provider = JsonConfigProvider::new(json!({ "spec": { "enabled": true } }));
        assert_eq!(provider.property("spec.enabled"), None);
    }

    #[test]
    fn config_reads_module_section() {
        let ctx = ctx(
            json!({ "modules": { "sample": { "config": { "priority": 7 } } } }),
            "sample",
        );

        let cfg: SampleConfig = ctx.config().unwrap();
        assert_eq!(cfg, SampleConfig { priority: 7 });
    }

    #[test]
    fn missing_section_yields_default() {
        let ctx = ctx(json!({}), "sample");

        let cfg: SampleConfig = ctx.config().unwrap();
        assert_eq!(cfg, SampleConfig::default());
    }

    #[test]
    fn malformed_section_names_the_module() {
        let ctx = ctx(
            json!({ "modules": { "sample": { "config": { "bogus": 1 } } } }),
            "sample",
        );

        let err = ctx.config::<SampleConfig>().unwrap_err();
        assert!(err.to_string().contains("'sample'"));
    }
}
