use poolscope_eth::{ContractError, ContractHandle};
use poolscope_types::{
    client::{ChainClient, WalletClient, WalletConnector},
    contract_bindings::{Erc20, IERC20}
};
use uniswap_v3::PoolReader;

use crate::{
    app::{Action, Dashboard, Effect},
    pool::PoolAction,
    render::render,
    session::SessionAction,
    token::TokenAction
};

/// Shown when a connector fails without saying why.
pub const CONNECT_FALLBACK: &str = "Failed to connect wallet";

/// Owns the dashboard state and the clients its effects run against.
///
/// [`DashboardDriver::dispatch`] reduces an action, executes the resulting
/// effect and feeds the outcome back in until the state settles. Effects run
/// one at a time, so at most one request per screen is ever in flight.
pub struct DashboardDriver<R, K: WalletConnector> {
    state:     Dashboard,
    connector: K,
    token:     ContractHandle<Erc20, R, K::Wallet>,
    pools:     PoolReader<R>
}

impl<R, K> DashboardDriver<R, K>
where
    R: ChainClient,
    K: WalletConnector
{
    pub fn new(
        state: Dashboard,
        connector: K,
        token: ContractHandle<Erc20, R, K::Wallet>,
        pools: PoolReader<R>
    ) -> Self {
        Self { state, connector, token, pools }
    }

    pub fn state(&self) -> &Dashboard {
        &self.state
    }

    pub fn render(&self) -> String {
        render(&self.state)
    }

    pub fn connector(&self) -> &K {
        &self.connector
    }

    pub fn token(&self) -> &ContractHandle<Erc20, R, K::Wallet> {
        &self.token
    }

    pub fn pools(&self) -> &PoolReader<R> {
        &self.pools
    }

    pub async fn dispatch(&mut self, action: impl Into<Action>) {
        let mut next = self.state.reduce(action.into());

        while let Some(effect) = next.take() {
            tracing::debug!(?effect, "executing effect");
            if let Some(outcome) = self.execute(effect).await {
                next = self.state.reduce(outcome);
            }
        }
    }

    async fn execute(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::Connect => {
                let result = match self.connector.connect().await {
                    Ok(wallet) => {
                        let account = wallet.account();
                        self.token.set_wallet(Some(wallet));
                        Ok(account)
                    }
                    Err(e) if e.message().trim().is_empty() => Err(CONNECT_FALLBACK.to_string()),
                    Err(e) => Err(e.message().to_string())
                };
                Some(SessionAction::Connected(result).into())
            }
            Effect::Disconnect => {
                self.token.set_wallet(None);
                self.connector.disconnect().await;
                None
            }
            Effect::FetchPool => {
                let result = self.pools.fetch_pool_info().await.map_err(display);
                Some(PoolAction::Fetched(result).into())
            }
            Effect::ReadBalance(owner) => {
                let result = self
                    .token
                    .read(IERC20::balanceOfCall { owner })
                    .await
                    .map_err(display);
                Some(TokenAction::BalanceFetched(result).into())
            }
            Effect::Transfer { to, amount } => {
                let result = self
                    .token
                    .write(IERC20::transferCall { to, amount })
                    .await
                    .map_err(display);
                Some(TokenAction::TransferSubmitted(result).into())
            }
        }
    }
}

fn display(error: ContractError) -> String {
    error.to_string()
}
