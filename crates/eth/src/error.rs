/// Shown when a read fails without the client saying why.
pub const READ_FALLBACK: &str = "Contract read failed";
/// Shown when a simulation or submission fails without the client saying why.
pub const WRITE_FALLBACK: &str = "Contract write failed";

/// Everything that can go wrong with a contract call. The display string is
/// what ends up on screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("Public client not initialized")]
    ClientNotInitialized,
    #[error("Wallet not connected or public client not initialized")]
    WalletNotConnected,
    #[error("{0}")]
    Read(String),
    #[error("{0}")]
    Write(String)
}

impl ContractError {
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(or_fallback(message.into(), READ_FALLBACK))
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(or_fallback(message.into(), WRITE_FALLBACK))
    }
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_string() } else { message }
}
