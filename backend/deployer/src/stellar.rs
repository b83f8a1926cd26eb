//! Thin async wrapper over the `stellar` CLI.
//!
//! Deployment shells out to the CLI rather than speaking RPC directly: the
//! CLI owns key management, transaction assembly and network presets, and
//! every operation used here is a one-shot command whose single-line stdout
//! is the result (a contract id or a public key).

use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::errors::{DeployError, Result};

pub struct Cli {
    network: String,
    source_account: String,
    rpc_url: Option<String>,
}

impl Cli {
    pub fn new(config: &Config) -> Self {
        Cli {
            network: config.network.as_str().to_string(),
            source_account: config.source_account.clone(),
            rpc_url: config.rpc_url.clone(),
        }
    }

    /// Deploy `wasm` with the given constructor arguments and return the
    /// new contract id.
    pub async fn deploy(&self, wasm: &str, ctor_args: &[(&str, String)]) -> Result<String> {
        let args = deploy_args(
            wasm,
            &self.network,
            &self.source_account,
            self.rpc_url.as_deref(),
            ctor_args,
        );
        self.run(&args).await
    }

    /// Contract id of the native asset's SAC on the target network.
    pub async fn native_asset_id(&self) -> Result<String> {
        let mut args = ["contract", "id", "asset", "--asset", "native"]
            .map(String::from)
            .to_vec();
        args.extend(network_args(
            &self.network,
            &self.source_account,
            self.rpc_url.as_deref(),
        ));
        self.run(&args).await
    }

    /// Public key behind a CLI identity name.
    pub async fn key_address(&self, name: &str) -> Result<String> {
        let args = ["keys", "address", name].map(String::from).to_vec();
        self.run(&args).await
    }

    async fn run(&self, args: &[String]) -> Result<String> {
        debug!(?args, "invoking stellar CLI");
        let output = Command::new("stellar").args(args).output().await?;
        if !output.status.success() {
            return Err(DeployError::Cli(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Common `--network`/`--source-account` flags.
fn network_args(network: &str, source_account: &str, rpc_url: Option<&str>) -> Vec<String> {
    let mut args = ["--network", network, "--source-account", source_account]
        .map(String::from)
        .to_vec();
    if let Some(url) = rpc_url {
        args.push("--rpc-url".to_string());
        args.push(url.to_string());
    }
    args
}

/// Full argument list for `stellar contract deploy`; constructor arguments
/// go after the `--` separator as `--name value` pairs.
fn deploy_args(
    wasm: &str,
    network: &str,
    source_account: &str,
    rpc_url: Option<&str>,
    ctor_args: &[(&str, String)],
) -> Vec<String> {
    let mut args = ["contract", "deploy", "--wasm", wasm]
        .map(String::from)
        .to_vec();
    args.extend(network_args(network, source_account, rpc_url));
    if !ctor_args.is_empty() {
        args.push("--".to_string());
        for (name, value) in ctor_args {
            args.push(format!("--{name}"));
            args.push(value.clone());
        }
    }
    args
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_args_separate_constructor_args() {
        let args = deploy_args(
            "fund_me.wasm",
            "testnet",
            "deployer",
            None,
            &[
                ("owner", "GOWNER".to_string()),
                ("price_feed", "CFEED".to_string()),
            ],
        );

        let sep = args.iter().position(|a| a == "--").expect("separator present");
        assert!(args[..sep].contains(&"--wasm".to_string()));
        assert!(args[..sep].contains(&"testnet".to_string()));
        assert_eq!(
            args[sep + 1..],
            ["--owner", "GOWNER", "--price_feed", "CFEED"].map(String::from)
        );
    }

    #[test]
    fn deploy_args_without_constructor_args_have_no_separator() {
        let args = deploy_args("mock_price_feed.wasm", "local", "deployer", None, &[]);
        assert!(!args.contains(&"--".to_string()));
    }

    #[test]
    fn rpc_url_is_forwarded() {
        let args = network_args("local", "deployer", Some("http://localhost:8000/rpc"));
        let pos = args.iter().position(|a| a == "--rpc-url").unwrap();
        assert_eq!(args[pos + 1], "http://localhost:8000/rpc");
    }
}
