use alloy::primitives::{Address, TxHash};
use poolscope_types::{
    client::{CallRequest, ChainClient, ClientError, SimulatedRequest, WalletClient},
    contract_bindings::{
        ContractAbi, ContractConfig, FunctionDescriptor, MutatingFunction, ViewFunction,
        function_name
    }
};

use crate::error::ContractError;

/// Typed reads and writes against one contract.
///
/// Which functions can be read and which can be written is fixed by `A`.
/// Both clients are optional: a handle can exist before the read client is
/// available or before a wallet is connected, and calls made in that state
/// fail without reaching the network.
#[derive(Clone)]
pub struct ContractHandle<A, R, W> {
    config: ContractConfig<A>,
    client: Option<R>,
    wallet: Option<W>
}

impl<A, R, W> ContractHandle<A, R, W>
where
    A: ContractAbi,
    R: ChainClient,
    W: WalletClient
{
    pub fn new(config: ContractConfig<A>, client: Option<R>, wallet: Option<W>) -> Self {
        Self { config, client, wallet }
    }

    pub fn address(&self) -> Address {
        self.config.address
    }

    pub fn functions(&self) -> &'static [FunctionDescriptor] {
        self.config.functions()
    }

    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }

    pub fn set_client(&mut self, client: Option<R>) {
        self.client = client;
    }

    pub fn set_wallet(&mut self, wallet: Option<W>) {
        self.wallet = wallet;
    }

    /// Calls a view function and decodes its return value.
    pub async fn read<C: ViewFunction<A>>(&self, call: C) -> Result<C::Return, ContractError> {
        let Some(client) = self.client.as_ref() else {
            return Err(ContractError::ClientNotInitialized)
        };

        let request = CallRequest::new(self.config.address, &call);
        tracing::debug!(
            contract = A::NAME,
            address = %self.config.address,
            function = function_name(C::SIGNATURE),
            "reading contract"
        );

        let output = client
            .read_contract(request)
            .await
            .map_err(|e| ContractError::read(e.message()))?;

        C::abi_decode_returns(&output).map_err(|e| ContractError::read(e.to_string()))
    }

    /// Simulates a state-changing call from the connected account, then hands
    /// the validated request to the wallet for signing and broadcast.
    pub async fn write<C: MutatingFunction<A>>(&self, call: C) -> Result<TxHash, ContractError> {
        let (Some(client), Some(wallet)) = (self.client.as_ref(), self.wallet.as_ref()) else {
            return Err(ContractError::WalletNotConnected)
        };

        let account = wallet.account();
        let request = CallRequest::new(self.config.address, &call);
        tracing::debug!(
            contract = A::NAME,
            address = %self.config.address,
            function = function_name(C::SIGNATURE),
            %account,
            "simulating contract write"
        );

        let simulated = client
            .simulate_contract(request, account)
            .await
            .map_err(write_error)?;
        let hash = submit(wallet, simulated).await?;

        tracing::info!(contract = A::NAME, %hash, "submitted transaction");
        Ok(hash)
    }
}

async fn submit<W: WalletClient>(
    wallet: &W,
    request: SimulatedRequest
) -> Result<TxHash, ContractError> {
    wallet.write_contract(request).await.map_err(write_error)
}

fn write_error(error: ClientError) -> ContractError {
    ContractError::write(error.message())
}

/// Wallet type for handles that only ever read. It has no values, so a
/// handle parameterised with it can never hold a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoWallet {}

#[async_trait::async_trait]
impl WalletClient for NoWallet {
    fn account(&self) -> Address {
        match *self {}
    }

    async fn write_contract(&self, _request: SimulatedRequest) -> Result<TxHash, ClientError> {
        match *self {}
    }
}
