use std::sync::Arc;

use alloy_primitives::{Address, TxHash};
use parking_lot::Mutex;
use poolscope_types::client::{ClientError, SimulatedRequest, WalletClient};

#[derive(Debug, Default)]
struct MockWalletState {
    submitted: Vec<SimulatedRequest>,
    failure:   Option<String>
}

/// Wallet that records every request handed to it for signing. Each
/// successful submission gets a distinct hash ending in its sequence number.
#[derive(Debug, Clone)]
pub struct MockWallet {
    account: Address,
    state:   Arc<Mutex<MockWalletState>>
}

impl MockWallet {
    pub fn new(account: Address) -> Self {
        Self { account, state: Arc::default() }
    }

    /// Every following submission fails with `message`.
    pub fn fail_with(&self, message: &str) -> &Self {
        self.state.lock().failure = Some(message.to_string());
        self
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().submitted.len()
    }

    pub fn submitted(&self) -> Vec<SimulatedRequest> {
        self.state.lock().submitted.clone()
    }
}

#[async_trait::async_trait]
impl WalletClient for MockWallet {
    fn account(&self) -> Address {
        self.account
    }

    async fn write_contract(&self, request: SimulatedRequest) -> Result<TxHash, ClientError> {
        let mut state = self.state.lock();
        state.submitted.push(request);

        if let Some(message) = &state.failure {
            return Err(ClientError::new(message.clone()))
        }

        Ok(TxHash::with_last_byte(state.submitted.len() as u8))
    }
}
