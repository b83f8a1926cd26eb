//! FundMe deployer — entry point.
//!
//! Recreates the per-network deploy pipeline: development networks get a
//! freshly provisioned mock price feed, live networks reuse a configured
//! oracle address; the funding ledger is then deployed wired to that feed
//! and, when live and credentialed, submitted for source verification.

mod config;
mod errors;
mod stellar;
mod verify;

use std::time::Duration;

use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;
    info!(network = config.network.as_str(), "starting deployment");

    let cli = stellar::Cli::new(&config);

    // ─── Price feed ───────────────────────────────────────
    let price_feed = if config.network.is_dev() {
        info!("local network detected, deploying mock price feed");
        let feed = cli
            .deploy(
                &config.mock_feed_wasm,
                &[
                    ("decimals", config.mock_decimals.to_string()),
                    ("initial_answer", config.mock_initial_answer.to_string()),
                ],
            )
            .await?;
        info!(%feed, "mock price feed deployed");
        feed
    } else {
        config.resolved_price_feed()?
    };

    // ─── Funding ledger ───────────────────────────────────
    // The signing identity becomes the contract owner.
    let owner = if config.source_account.starts_with('G') {
        config.source_account.clone()
    } else {
        cli.key_address(&config.source_account).await?
    };
    let funding_token = cli.native_asset_id().await?;

    let ctor_args = [
        ("owner", owner),
        ("price_feed", price_feed),
        ("funding_token", funding_token),
    ];
    let contract_id = cli.deploy(&config.fund_me_wasm, &ctor_args).await?;
    info!(%contract_id, "funding ledger deployed");

    // ─── Source verification ──────────────────────────────
    if verify::should_verify(config.network, config.explorer_api_key.as_deref()) {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        verify::verify_contract(&http, &config, &contract_id, &ctor_args).await?;
    } else {
        info!("skipping source verification");
    }

    Ok(())
}
