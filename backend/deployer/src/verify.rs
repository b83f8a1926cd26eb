//! Source verification against the block explorer.
//!
//! Live deployments with a credential configured are submitted for source
//! verification after deploying; local deployments skip this step entirely.

use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::{Config, Network};
use crate::errors::{DeployError, Result};

const VERIFY_BASE_URL: &str = "https://api.stellar.expert/explorer";

/// Verification runs only against live networks and only when a credential
/// is configured.
pub fn should_verify(network: Network, api_key: Option<&str>) -> bool {
    !network.is_dev() && api_key.is_some()
}

/// Constructor arguments are submitted alongside the contract id so the
/// explorer can reproduce the deployment.
#[derive(Debug, Serialize, PartialEq)]
pub struct VerificationRequest {
    pub contract: String,
    pub package: String,
    pub constructor_args: Vec<ConstructorArg>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ConstructorArg {
    pub name: String,
    pub value: String,
}

pub fn build_request(contract_id: &str, ctor_args: &[(&str, String)]) -> VerificationRequest {
    VerificationRequest {
        contract: contract_id.to_string(),
        package: "fund_me".to_string(),
        constructor_args: ctor_args
            .iter()
            .map(|(name, value)| ConstructorArg {
                name: (*name).to_string(),
                value: value.clone(),
            })
            .collect(),
    }
}

pub async fn verify_contract(
    http: &Client,
    config: &Config,
    contract_id: &str,
    ctor_args: &[(&str, String)],
) -> Result<()> {
    let api_key = config.explorer_api_key.as_deref().ok_or_else(|| {
        DeployError::Config("EXPLORER_API_KEY is required for verification".to_string())
    })?;

    let url = format!(
        "{VERIFY_BASE_URL}/{}/contract-validation",
        config.network.as_str()
    );
    let request = build_request(contract_id, ctor_args);

    let response = http
        .post(&url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        info!(contract = contract_id, "submitted for source verification");
        return Ok(());
    }
    if status == reqwest::StatusCode::CONFLICT {
        info!(contract = contract_id, "already verified");
        return Ok(());
    }
    Err(DeployError::Verification(format!(
        "explorer returned {status} for {contract_id}"
    )))
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
