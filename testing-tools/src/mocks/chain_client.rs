use std::{collections::HashMap, sync::Arc};

use alloy::{network::TransactionBuilder, sol_types::SolCall};
use alloy_primitives::{Address, Bytes};
use parking_lot::Mutex;
use poolscope_types::client::{CallRequest, ChainClient, ClientError, SimulatedRequest};

type Scripted = Result<Bytes, ClientError>;

#[derive(Debug, Default)]
struct MockChainState {
    reads:             HashMap<&'static str, Scripted>,
    simulations:       HashMap<&'static str, ClientError>,
    read_requests:     Vec<CallRequest>,
    simulate_requests: Vec<(CallRequest, Address)>
}

/// Chain client answering from a table of scripted responses keyed by
/// function signature. Clones share the same table and request log, so a
/// test can keep a handle while the code under test owns another.
///
/// Reads with no scripted response fail; simulations without a scripted
/// revert succeed.
#[derive(Debug, Clone, Default)]
pub struct MockChainClient {
    state: Arc<Mutex<MockChainState>>
}

impl MockChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful read of `C`.
    pub fn respond<C: SolCall>(&self, ret: &C::Return) -> &Self {
        self.state
            .lock()
            .reads
            .insert(C::SIGNATURE, Ok(C::abi_encode_returns(ret).into()));
        self
    }

    /// Scripts a failing read of `C`.
    pub fn fail<C: SolCall>(&self, message: &str) -> &Self {
        self.state
            .lock()
            .reads
            .insert(C::SIGNATURE, Err(ClientError::new(message)));
        self
    }

    /// Scripts raw return data for a read, e.g. undecodable bytes.
    pub fn respond_raw<C: SolCall>(&self, data: Bytes) -> &Self {
        self.state.lock().reads.insert(C::SIGNATURE, Ok(data));
        self
    }

    /// Scripts a revert during simulation of `C`.
    pub fn revert_simulation<C: SolCall>(&self, message: &str) -> &Self {
        self.state
            .lock()
            .simulations
            .insert(C::SIGNATURE, ClientError::new(message));
        self
    }

    pub fn read_count(&self) -> usize {
        self.state.lock().read_requests.len()
    }

    pub fn simulate_count(&self) -> usize {
        self.state.lock().simulate_requests.len()
    }

    pub fn read_requests(&self) -> Vec<CallRequest> {
        self.state.lock().read_requests.clone()
    }

    pub fn simulate_requests(&self) -> Vec<(CallRequest, Address)> {
        self.state.lock().simulate_requests.clone()
    }

    /// Decodes every simulated call of type `C`, in submission order.
    pub fn simulated_calls<C: SolCall>(&self) -> Vec<C> {
        self.state
            .lock()
            .simulate_requests
            .iter()
            .filter(|(request, _)| request.function == C::SIGNATURE)
            .filter_map(|(request, _)| C::abi_decode(&request.calldata).ok())
            .collect()
    }
}

#[async_trait::async_trait]
impl ChainClient for MockChainClient {
    async fn read_contract(&self, request: CallRequest) -> Result<Bytes, ClientError> {
        let mut state = self.state.lock();
        let response = state.reads.get(request.function).cloned();
        tracing::trace!(function = request.function, "mock read");
        state.read_requests.push(request.clone());

        response.unwrap_or_else(|| {
            Err(ClientError::new(format!("no scripted response for {}", request.function)))
        })
    }

    async fn simulate_contract(
        &self,
        request: CallRequest,
        account: Address
    ) -> Result<SimulatedRequest, ClientError> {
        let mut state = self.state.lock();
        let revert = state.simulations.get(request.function).cloned();
        state.simulate_requests.push((request.clone(), account));

        match revert {
            Some(err) => Err(err),
            None => Ok(SimulatedRequest { request: request.into_transaction().with_from(account) })
        }
    }
}
