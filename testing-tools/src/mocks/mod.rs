mod chain_client;
mod connector;
mod wallet;

pub use chain_client::*;
pub use connector::*;
pub use wallet::*;
