use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering}
};

use parking_lot::Mutex;
use poolscope_types::client::{ClientError, ConnectionStatus, WalletClient, WalletConnector};

use super::MockWallet;

/// Connector that hands out a fixed [`MockWallet`], or fails with a fixed
/// message.
#[derive(Debug, Clone)]
pub struct MockConnector {
    wallet:   MockWallet,
    failure:  Arc<Mutex<Option<String>>>,
    status:   Arc<Mutex<ConnectionStatus>>,
    connects: Arc<AtomicUsize>
}

impl MockConnector {
    pub fn new(wallet: MockWallet) -> Self {
        Self {
            wallet,
            failure:  Arc::default(),
            status:   Arc::default(),
            connects: Arc::default()
        }
    }

    pub fn fail_with(&self, message: &str) -> &Self {
        *self.failure.lock() = Some(message.to_string());
        self
    }

    pub fn succeed(&self) -> &Self {
        *self.failure.lock() = None;
        self
    }

    pub fn wallet(&self) -> &MockWallet {
        &self.wallet
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl WalletConnector for MockConnector {
    type Wallet = MockWallet;

    async fn connect(&self) -> Result<MockWallet, ClientError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let failure = self.failure.lock().clone();

        match failure {
            Some(message) => {
                *self.status.lock() = ConnectionStatus::Disconnected;
                Err(ClientError::new(message))
            }
            None => {
                *self.status.lock() = ConnectionStatus::Connected(self.wallet.account());
                Ok(self.wallet.clone())
            }
        }
    }

    async fn disconnect(&self) {
        *self.status.lock() = ConnectionStatus::Disconnected;
    }

    fn status(&self) -> ConnectionStatus {
        *self.status.lock()
    }
}
