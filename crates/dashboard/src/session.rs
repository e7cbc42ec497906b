use alloy::primitives::Address;

use crate::app::Effect;

/// Wallet connection as seen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Disconnected,
    Connecting,
    Connected(Address),
    /// The last connect attempt failed. Connecting again is allowed.
    Failed(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Connect,
    Connected(Result<Address, String>),
    Disconnect
}

impl Session {
    pub fn account(&self) -> Option<Address> {
        match self {
            Self::Connected(account) => Some(*account),
            _ => None
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None
        }
    }

    pub fn reduce(&mut self, action: SessionAction) -> Option<Effect> {
        match action {
            SessionAction::Connect => match self {
                Self::Connecting | Self::Connected(_) => None,
                Self::Disconnected | Self::Failed(_) => {
                    *self = Self::Connecting;
                    Some(Effect::Connect)
                }
            },
            SessionAction::Connected(result) => {
                if *self != Self::Connecting {
                    tracing::debug!(session = ?self, "dropping connect result");
                    return None
                }
                *self = match result {
                    Ok(account) => Self::Connected(account),
                    Err(message) => Self::Failed(message)
                };
                None
            }
            SessionAction::Disconnect => {
                *self = Self::Disconnected;
                Some(Effect::Disconnect)
            }
        }
    }
}
