//! Capabilities the dashboard consumes from the chain client stack.
//!
//! Only the operations the dashboard needs are exposed: read a view
//! function, simulate a state-changing call, submit a simulated request, and
//! connect/disconnect a wallet. Everything below that (transport, encoding,
//! signing) belongs to the implementation.
use alloy::{
    network::TransactionBuilder, rpc::types::TransactionRequest, sol_types::SolCall,
    transports::TransportError
};
use alloy_primitives::{Address, Bytes, TxHash};

use crate::contract_bindings::function_name;

/// A fully encoded call against one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub address:  Address,
    /// canonical signature of the called function
    pub function: &'static str,
    pub calldata: Bytes
}

impl CallRequest {
    pub fn new<C: SolCall>(address: Address, call: &C) -> Self {
        Self { address, function: C::SIGNATURE, calldata: call.abi_encode().into() }
    }

    pub fn function_name(&self) -> &'static str {
        function_name(self.function)
    }

    pub fn into_transaction(self) -> TransactionRequest {
        TransactionRequest::default()
            .with_to(self.address)
            .with_input(self.calldata)
    }
}

/// A state-changing call that executed cleanly against current chain state
/// and is ready to be signed.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedRequest {
    pub request: TransactionRequest
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected(Address)
}

impl ConnectionStatus {
    pub fn account(&self) -> Option<Address> {
        match self {
            Self::Connected(account) => Some(*account),
            _ => None
        }
    }
}

/// Any failure raised by a client. Carries the client's own message
/// untouched; an empty message means the client had nothing to say.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    message: String
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TransportError> for ClientError {
    fn from(error: TransportError) -> Self {
        Self::new(error.to_string())
    }
}

/// Read access to the chain, plus call simulation.
#[async_trait::async_trait]
pub trait ChainClient: Clone + Send + Sync + 'static {
    /// Executes a view call and returns the raw return data.
    async fn read_contract(&self, request: CallRequest) -> Result<Bytes, ClientError>;

    /// Executes a state-changing call from `account` without committing it.
    /// Reverts surface here, before anything is signed.
    async fn simulate_contract(
        &self,
        request: CallRequest,
        account: Address
    ) -> Result<SimulatedRequest, ClientError>;
}

/// A connected wallet able to sign and broadcast.
#[async_trait::async_trait]
pub trait WalletClient: Clone + Send + Sync + 'static {
    fn account(&self) -> Address;

    async fn write_contract(&self, request: SimulatedRequest) -> Result<TxHash, ClientError>;
}

/// Hands out a [`WalletClient`] once the user has connected.
#[async_trait::async_trait]
pub trait WalletConnector: Send + Sync + 'static {
    type Wallet: WalletClient;

    async fn connect(&self) -> Result<Self::Wallet, ClientError>;

    async fn disconnect(&self);

    fn status(&self) -> ConnectionStatus;
}
