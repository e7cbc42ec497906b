use std::path::PathBuf;

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner
};
use parking_lot::RwLock;
use poolscope_types::client::{ClientError, ConnectionStatus, WalletClient, WalletConnector};
use url::Url;

use crate::rpc::ProviderWallet;

/// Connects a wallet from a secret key stored on disk.
///
/// The key is read on every connect, never cached, and the endpoint must
/// serve the configured chain.
pub struct LocalKeyConnector {
    key_path: Option<PathBuf>,
    rpc_url:  Url,
    chain_id: u64,
    status:   RwLock<ConnectionStatus>
}

impl LocalKeyConnector {
    pub fn new(key_path: Option<PathBuf>, rpc_url: Url, chain_id: u64) -> Self {
        Self { key_path, rpc_url, chain_id, status: RwLock::default() }
    }

    fn load_signer(&self) -> Result<PrivateKeySigner, ClientError> {
        let Some(key_path) = self.key_path.as_ref() else {
            return Err(ClientError::new(
                "no local secret key configured, pass --local-secret-key-location"
            ))
        };

        if !key_path.try_exists().map_err(|e| ClientError::new(e.to_string()))? {
            return Err(ClientError::new(format!("no secret_key was found at {key_path:?}")))
        }

        let contents =
            std::fs::read_to_string(key_path).map_err(|e| ClientError::new(e.to_string()))?;
        contents
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| ClientError::new(format!("invalid secret key at {key_path:?}: {e}")))
    }

    async fn establish(&self) -> Result<ProviderWallet, ClientError> {
        let signer = self.load_signer()?;
        let account = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(self.rpc_url.clone())
            .erased();

        let remote_chain = provider.get_chain_id().await?;
        if remote_chain != self.chain_id {
            return Err(ClientError::new(format!(
                "rpc endpoint serves chain {remote_chain}, expected {}",
                self.chain_id
            )))
        }

        Ok(ProviderWallet::new(provider, account))
    }
}

#[async_trait::async_trait]
impl WalletConnector for LocalKeyConnector {
    type Wallet = ProviderWallet;

    async fn connect(&self) -> Result<ProviderWallet, ClientError> {
        *self.status.write() = ConnectionStatus::Connecting;

        let result = self.establish().await;
        *self.status.write() = match &result {
            Ok(wallet) => {
                tracing::info!(account = %wallet.account(), "wallet connected");
                ConnectionStatus::Connected(wallet.account())
            }
            Err(e) => {
                tracing::warn!("wallet connection failed: {e}");
                ConnectionStatus::Disconnected
            }
        };

        result
    }

    async fn disconnect(&self) {
        *self.status.write() = ConnectionStatus::Disconnected;
        tracing::info!("wallet disconnected");
    }

    fn status(&self) -> ConnectionStatus {
        *self.status.read()
    }
}
