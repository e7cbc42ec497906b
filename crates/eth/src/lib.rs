//! Contract calls against the chain: the typed read/write wrapper and the
//! alloy-backed clients it runs on.
pub mod connector;
pub mod contract;
pub mod error;
pub mod rpc;

pub use connector::LocalKeyConnector;
pub use contract::{ContractHandle, NoWallet};
pub use error::ContractError;
pub use rpc::{ProviderWallet, RpcChainClient};
