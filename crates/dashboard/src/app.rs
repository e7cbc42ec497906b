use alloy::primitives::{Address, U256};

use crate::{
    pool::{PoolAction, PoolScreen},
    session::{Session, SessionAction},
    token::{TokenAction, TokenMeta, TokenScreen}
};

/// Work a reducer asks the driver to do against the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Connect,
    Disconnect,
    FetchPool,
    ReadBalance(Address),
    Transfer { to: Address, amount: U256 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Session(SessionAction),
    Pool(PoolAction),
    Token(TokenAction)
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Self::Session(action)
    }
}

impl From<PoolAction> for Action {
    fn from(action: PoolAction) -> Self {
        Self::Pool(action)
    }
}

impl From<TokenAction> for Action {
    fn from(action: TokenAction) -> Self {
        Self::Token(action)
    }
}

/// Decimals of the pool's two tokens, used to show a human price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolDecimals {
    pub token0: u8,
    pub token1: u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub session:       Session,
    pub pool:          PoolScreen,
    pub token:         TokenScreen,
    pub pool_decimals: PoolDecimals
}

impl Dashboard {
    pub fn new(token: TokenMeta, pool_decimals: PoolDecimals) -> Self {
        Self {
            session:       Session::default(),
            pool:          PoolScreen::default(),
            token:         TokenScreen::new(token),
            pool_decimals
        }
    }

    pub fn account(&self) -> Option<Address> {
        self.session.account()
    }

    pub fn reduce(&mut self, action: Action) -> Option<Effect> {
        tracing::trace!(?action, "reducing");
        match action {
            Action::Session(action) => {
                let disconnecting = action == SessionAction::Disconnect;
                let effect = self.session.reduce(action);
                if disconnecting {
                    self.token.reset();
                }
                effect
            }
            Action::Pool(action) => self.pool.reduce(action),
            Action::Token(action) => self.token.reduce(action, self.session.account())
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::token::Phase;

    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn dashboard() -> Dashboard {
        Dashboard::new(
            TokenMeta { symbol: "USDC".into(), decimals: 6 },
            PoolDecimals { token0: 6, token1: 18 }
        )
    }

    #[test]
    fn token_actions_see_the_session_account() {
        let mut state = dashboard();
        assert_eq!(state.reduce(TokenAction::FetchBalance.into()), None);

        state.reduce(SessionAction::Connect.into());
        state.reduce(SessionAction::Connected(Ok(ACCOUNT)).into());
        assert_eq!(
            state.reduce(TokenAction::FetchBalance.into()),
            Some(Effect::ReadBalance(ACCOUNT))
        );
    }

    #[test]
    fn disconnect_clears_token_state() {
        let mut state = dashboard();
        state.session = Session::Connected(ACCOUNT);
        state.token.balance = Some("12.34".into());
        state.token.form.amount = "5".into();
        state.token.phase = Phase::Failed("boom".into());

        assert_eq!(state.reduce(SessionAction::Disconnect.into()), Some(Effect::Disconnect));
        assert_eq!(state.session, Session::Disconnected);
        assert_eq!(state.token, TokenScreen::new(state.token.meta.clone()));
    }

    #[test]
    fn pool_is_independent_of_session() {
        let mut state = dashboard();
        assert_eq!(state.reduce(PoolAction::Fetch.into()), Some(Effect::FetchPool));
        assert!(state.pool.is_loading());
        assert_eq!(state.session, Session::Disconnected);
    }
}
