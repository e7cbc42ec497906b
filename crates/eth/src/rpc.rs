use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder}
};
use poolscope_types::client::{
    CallRequest, ChainClient, ClientError, SimulatedRequest, WalletClient
};
use url::Url;

/// Read client over a single JSON-RPC endpoint.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: DynProvider
}

impl RpcChainClient {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    pub fn connect_http(url: Url) -> Self {
        Self::new(ProviderBuilder::new().connect_http(url).erased())
    }
}

#[async_trait::async_trait]
impl ChainClient for RpcChainClient {
    async fn read_contract(&self, request: CallRequest) -> Result<Bytes, ClientError> {
        Ok(self.provider.call(request.into_transaction()).await?)
    }

    async fn simulate_contract(
        &self,
        request: CallRequest,
        account: Address
    ) -> Result<SimulatedRequest, ClientError> {
        let tx = request.into_transaction().with_from(account);

        // a revert shows up on the call, before gas estimation
        self.provider.call(tx.clone()).await?;
        let gas = self.provider.estimate_gas(tx.clone()).await?;

        Ok(SimulatedRequest { request: tx.with_gas_limit(gas) })
    }
}

/// Wallet client backed by a provider that carries the signer as a filler,
/// so nonce, fees and chain id are filled in at submission.
#[derive(Clone)]
pub struct ProviderWallet {
    provider: DynProvider,
    account:  Address
}

impl ProviderWallet {
    pub fn new(provider: DynProvider, account: Address) -> Self {
        Self { provider, account }
    }
}

#[async_trait::async_trait]
impl WalletClient for ProviderWallet {
    fn account(&self) -> Address {
        self.account
    }

    async fn write_contract(&self, request: SimulatedRequest) -> Result<TxHash, ClientError> {
        let pending = self.provider.send_transaction(request.request).await?;
        Ok(*pending.tx_hash())
    }
}
