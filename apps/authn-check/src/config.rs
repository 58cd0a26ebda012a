//! Configuration loading for `authn-check`.
//!
//! The YAML file is merged with `AUTHN__`-prefixed environment variables
//! (nesting split on `__`). The merged tree is kept as JSON for the provider
//! modules; only the logging section is typed here.

use std::path::Path;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde_json::Value;

pub const ENV_PREFIX: &str = "AUTHN__";

const REDACTED: &str = "<redacted>";

/// Logging section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize)]
struct TypedSections {
    #[serde(default)]
    logging: LoggingConfig,
}

/// Effective application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    raw: Value,
}

impl AppConfig {
    /// Load the configuration file (if any) and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or any section is malformed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "configuration file '{}' not found",
                path.display()
            );
        }

        let figment = figment(path);
        let raw: Value = figment
            .extract()
            .context("failed to load configuration")?;
        let typed: TypedSections = figment
            .extract()
            .context("invalid logging configuration")?;

        Ok(Self {
            logging: typed.logging,
            raw,
        })
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Configuration tree with every `secret` value masked.
    #[must_use]
    pub fn redacted(&self) -> Value {
        let mut tree = self.raw().clone();
        redact_secrets(&mut tree);
        tree
    }
}

fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

fn redact_secrets(node: &mut Value) {
    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                if key == "secret" {
                    *value = Value::String(REDACTED.to_owned());
                } else {
                    redact_secrets(value);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}
