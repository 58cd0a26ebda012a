//! Registry of authentication providers.

use std::fmt;
use std::sync::Arc;

use authn_sdk::AuthenticationProvider;
use parking_lot::RwLock;
use tracing::{info, warn};

/// A provider together with its registration metadata.
#[derive(Clone)]
pub struct RegisteredProvider {
    name: Arc<str>,
    priority: i16,
    provider: Arc<dyn AuthenticationProvider>,
}

impl RegisteredProvider {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower values are consulted first.
    #[must_use]
    pub fn priority(&self) -> i16 {
        self.priority
    }

    #[must_use]
    pub fn provider(&self) -> &Arc<dyn AuthenticationProvider> {
        &self.provider
    }
}

impl fmt::Debug for RegisteredProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredProvider")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Thread-safe set of providers, kept ordered by ascending priority.
///
/// Providers with equal priority keep their registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    entries: RwLock<Vec<RegisteredProvider>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. An existing entry with the same name is replaced.
    pub fn register(&self, name: &str, priority: i16, provider: Arc<dyn AuthenticationProvider>) {
        let mut entries = self.entries.write();

        if let Some(existing) = entries.iter_mut().find(|e| &*e.name == name) {
            warn!(provider = name, priority, "Replacing registered authentication provider");
            existing.priority = priority;
            existing.provider = provider;
        } else {
            info!(provider = name, priority, "Registered authentication provider");
            entries.push(RegisteredProvider {
                name: name.into(),
                priority,
                provider,
            });
        }

        entries.sort_by_key(|e| e.priority);
    }

    /// Snapshot of the providers in consultation order.
    #[must_use]
    pub fn providers(&self) -> Vec<RegisteredProvider> {
        self.entries.read().clone()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().iter().any(|e| &*e.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
