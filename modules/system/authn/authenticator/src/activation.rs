//! Configuration-driven activation of provider modules.
//!
//! A provider module only registers its provider when its activation rule
//! holds: the module is enabled and every required property has the
//! expected value.

use serde::Deserialize;

use crate::context::ConfigProvider;

/// Activation rule of a provider module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivationConfig {
    /// Master switch. `false` always skips registration.
    pub enabled: bool,

    /// Properties that must all match.
    pub requires: Vec<PropertyRequirement>,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requires: Vec::new(),
        }
    }
}

/// A property that must be present with an exact value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyRequirement {
    /// Dotted property path, e.g. `spec.name`.
    pub property: String,
    /// Required value.
    pub value: String,
}

/// Outcome of evaluating an [`ActivationConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Active,
    Disabled,
    /// A required property is missing or has another value.
    Unmet {
        property: String,
        expected: String,
        actual: Option<String>,
    },
}

impl ActivationConfig {
    /// Enabled rule with a single property requirement.
    #[must_use]
    pub fn requiring(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: true,
            requires: vec![PropertyRequirement {
                property: property.into(),
                value: value.into(),
            }],
        }
    }

    #[must_use]
    pub fn evaluate(&self, props: &dyn ConfigProvider) -> Activation {
        if !self.enabled {
            return Activation::Disabled;
        }

        for req in &self.requires {
            let actual = props.property(&req.property);
            if actual != Some(req.value.as_str()) {
                return Activation::Unmet {
                    property: req.property.clone(),
                    expected: req.value.clone(),
                    actual: actual.map(ToOwned::to_owned),
                };
            }
        }

        Activation::Active
    }

    #[must_use]
    pub fn is_active(&self, props: &dyn ConfigProvider) -> bool {
        self.evaluate(props) == Activation::Active
    }
}
