#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end wiring of the static credentials plugin into the authenticator.
//!
//! These tests verify that:
//! 1. The plugin self-registers and is picked up by `bootstrap`
//! 2. `user` / `password` authenticates through the public client
//! 3. Without the activating property nothing is registered

use std::sync::Arc;

use authn_authenticator::{
    AuthenticatorLocalClient, JsonConfigProvider, ProviderModule, bootstrap, bootstrap_modules,
};
use authn_sdk::{AuthNClient, AuthNError, AuthenticationRequest};
use serde_json::{Value, json};
use static_credentials_plugin::StaticCredentialsPlugin;
use static_credentials_plugin::module::PROVIDER_NAME;

fn config(root: Value) -> Arc<JsonConfigProvider> {
    Arc::new(JsonConfigProvider::new(root))
}

async fn client(root: Value) -> AuthenticatorLocalClient {
    let modules: Vec<Box<dyn ProviderModule>> = vec![Box::new(StaticCredentialsPlugin::default())];
    let svc = bootstrap_modules(config(root), modules).await.unwrap();
    AuthenticatorLocalClient::new(svc)
}

#[tokio::test]
async fn linked_plugin_is_discovered() {
    let svc = bootstrap(config(json!({ "spec": { "name": "rsajwtgateway" } })))
        .await
        .unwrap();

    assert!(svc.registry().contains(PROVIDER_NAME));
}

#[tokio::test]
async fn fixed_pair_authenticates_through_client() {
    let client = client(json!({ "spec": { "name": "rsajwtgateway" } })).await;

    let response = client
        .authenticate(AuthenticationRequest::new("user", "password"))
        .await
        .unwrap();

    let user = response.user_details().expect("expected success");
    assert_eq!(user.username(), "user");
    assert!(user.authorities().is_empty());
}

#[tokio::test]
async fn wrong_secret_is_a_failure_value() {
    let client = client(json!({ "spec": { "name": "rsajwtgateway" } })).await;

    let response = client
        .authenticate(AuthenticationRequest::new("user", "Password"))
        .await
        .unwrap();

    assert!(!response.is_authenticated());
}

#[tokio::test]
async fn payload_with_missing_secret_is_a_failure_value() {
    let client = client(json!({ "spec": { "name": "rsajwtgateway" } })).await;
    let request: AuthenticationRequest =
        serde_json::from_value(json!({ "identity": "user" })).unwrap();

    let response = client.authenticate(request).await.unwrap();

    assert!(!response.is_authenticated());
}

#[tokio::test]
async fn inactive_plugin_means_no_provider() {
    let client = client(json!({ "spec": { "name": "something-else" } })).await;

    let err = client
        .authenticate(AuthenticationRequest::new("user", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthNError::NoProviderAvailable));
}

#[tokio::test]
async fn configured_authorities_are_granted() {
    let client = client(json!({
        "spec": { "name": "rsajwtgateway" },
        "modules": {
            "static_credentials_plugin": {
                "config": { "authorities": ["ROLE_USER"] }
            }
        }
    }))
    .await;

    let response = client
        .authenticate(AuthenticationRequest::new("user", "password"))
        .await
        .unwrap();

    let user = response.user_details().unwrap();
    assert!(user.authorities().contains("ROLE_USER"));
}
