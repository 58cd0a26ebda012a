//! Configuration for the static credentials plugin.

use authn_authenticator::ActivationConfig;
use std::fmt;

use secrecy::SecretString;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Property that gates the plugin by default.
pub const DEFAULT_ACTIVATION_PROPERTY: &str = "spec.name";
/// Value of [`DEFAULT_ACTIVATION_PROPERTY`] that activates the plugin.
pub const DEFAULT_ACTIVATION_VALUE: &str = "rsajwtgateway";

pub const DEFAULT_IDENTITY: &str = "user";
pub const DEFAULT_SECRET: &str = "password";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticCredentialsPluginConfig {
    /// Provider priority (lower = consulted first).
    pub priority: i16,

    /// When the provider is registered at all.
    pub activation: ActivationConfig,

    /// Accepted identity, also used as the principal name.
    #[serde(deserialize_with = "deserialize_text")]
    pub identity: String,

    /// Accepted secret.
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,

    /// Authorities granted on success.
    pub authorities: Vec<String>,
}

impl Default for StaticCredentialsPluginConfig {
    fn default() -> Self {
        Self {
            priority: 100,
            activation: ActivationConfig::requiring(
                DEFAULT_ACTIVATION_PROPERTY,
                DEFAULT_ACTIVATION_VALUE,
            ),
            identity: DEFAULT_IDENTITY.to_owned(),
            secret: SecretString::from(DEFAULT_SECRET.to_owned()),
            authorities: Vec::new(),
        }
    }
}

// Environment overrides and bare YAML scalars turn digit-only values into
// numbers; credentials are always text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl Visitor<'_> for TextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_text(deserializer).map(SecretString::from)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_are_the_fixed_pair() {
        let cfg = StaticCredentialsPluginConfig::default();

        assert_eq!(cfg.identity, "user");
        assert_eq!(cfg.secret.expose_secret(), "password");
        assert!(cfg.authorities.is_empty());
        assert_eq!(cfg.priority, 100);
        assert_eq!(
            cfg.activation,
            ActivationConfig::requiring("spec.name", "rsajwtgateway")
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: StaticCredentialsPluginConfig =
            serde_json::from_value(json!({ "secret": "s3cret", "authorities": ["ROLE_ADMIN"] }))
                .unwrap();

        assert_eq!(cfg.identity, "user");
        assert_eq!(cfg.secret.expose_secret(), "s3cret");
        assert_eq!(cfg.authorities, ["ROLE_ADMIN"]);
    }

    #[test]
    fn debug_redacts_secret() {
        let cfg: StaticCredentialsPluginConfig =
            serde_json::from_value(json!({ "secret": "do-not-print" })).unwrap();

        assert!(!format!("{cfg:?}").contains("do-not-print"));
    }

    #[test]
    fn numeric_credentials_are_kept_as_text() {
        let cfg: StaticCredentialsPluginConfig =
            serde_json::from_value(json!({ "identity": 42, "secret": 123_456 })).unwrap();

        assert_eq!(cfg.identity, "42");
        assert_eq!(cfg.secret.expose_secret(), "123456");
    }

    #[test]
    fn non_scalar_secret_is_rejected() {
        let result: Result<StaticCredentialsPluginConfig, _> =
            serde_json::from_value(json!({ "secret": ["a", "b"] }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<StaticCredentialsPluginConfig, _> =
            serde_json::from_value(json!({ "password": "x" }));
        assert!(result.is_err());
    }
}
