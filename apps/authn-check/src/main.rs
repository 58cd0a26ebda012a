//! `authn-check`: run one authentication attempt through the configured providers.
//!
//! Prints the JSON response on stdout. Exit status is 0 when authenticated,
//! 1 when the credentials were rejected and 2 on configuration or provider
//! errors.

mod config;
mod logging;
mod registered_modules;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use authn_authenticator::{AuthenticatorLocalClient, JsonConfigProvider};
use authn_sdk::{AuthNClient, AuthenticationRequest, AuthenticationResponse};
use clap::Parser;
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "authn-check", version, about = "Authenticate an identity/secret pair")]
struct Cli {
    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Identity (username) to authenticate.
    #[arg(short, long)]
    identity: Option<String>,

    /// Secret (password). Prefer the environment variable over the flag.
    #[arg(long, env = "AUTHN_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Print the effective configuration (secrets masked) and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli).await;
    if let Err(e) = &result {
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when authenticated (or nothing to authenticate), 1 when rejected, 2 on error.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let cfg = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        println!("{}", render_config(&cfg)?);
        return Ok(true);
    }

    logging::init(&cfg.logging)?;

    let request = AuthenticationRequest::from_parts(cli.identity, cli.secret);
    let response = authenticate_once(cfg, request).await?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(response.is_authenticated())
}

fn render_config(cfg: &AppConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&cfg.redacted())?)
}

/// Wire the linked provider modules and authenticate a single request.
async fn authenticate_once(
    cfg: AppConfig,
    request: AuthenticationRequest,
) -> anyhow::Result<AuthenticationResponse> {
    let provider = Arc::new(JsonConfigProvider::new(cfg.into_raw()));
    let authenticator = authn_authenticator::bootstrap(provider).await?;
    let client: Arc<dyn AuthNClient> = Arc::new(AuthenticatorLocalClient::new(authenticator));

    let response = client.authenticate(request).await?;
    info!(authenticated = response.is_authenticated(), "Authentication finished");
    Ok(response)
}
