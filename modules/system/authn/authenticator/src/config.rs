//! Configuration for the authenticator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthenticatorConfig {
    /// How the outcomes of several providers are combined.
    pub strategy: AuthenticationStrategy,
}

/// Provider combination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationStrategy {
    /// The first provider that accepts the credentials wins.
    #[default]
    Any,
    /// Every registered provider must accept the credentials.
    All,
}

impl AuthenticationStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl fmt::Display for AuthenticationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_config_defaults_to_any() {
        let cfg: AuthenticatorConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cfg.strategy, AuthenticationStrategy::Any);
    }

    #[test]
    fn strategy_is_snake_case() {
        let cfg: AuthenticatorConfig = serde_json::from_value(json!({ "strategy": "all" })).unwrap();
        assert_eq!(cfg.strategy, AuthenticationStrategy::All);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AuthenticatorConfig, _> =
            serde_json::from_value(json!({ "strategy": "any", "retries": 3 }));
        assert!(result.is_err());
    }
}
