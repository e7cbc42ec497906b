use alloy::primitives::{Address, aliases::U24};
use poolscope_eth::{ContractError, ContractHandle, NoWallet};
use poolscope_types::{
    client::ChainClient,
    contract_bindings::{
        ContractConfig, IUniswapV3Factory, IUniswapV3Pool, UniswapV3Factory, UniswapV3Pool
    },
    pool::PoolInfo
};

#[derive(Clone)]
pub struct PoolReader<R> {
    pool:    ContractHandle<UniswapV3Pool, R, NoWallet>,
    factory: ContractHandle<UniswapV3Factory, R, NoWallet>
}

impl<R: ChainClient> PoolReader<R> {
    pub fn new(
        pool: ContractConfig<UniswapV3Pool>,
        factory: ContractConfig<UniswapV3Factory>,
        client: Option<R>
    ) -> Self {
        Self {
            pool:    ContractHandle::new(pool, client.clone(), None),
            factory: ContractHandle::new(factory, client, None)
        }
    }

    pub fn pool_address(&self) -> Address {
        self.pool.address()
    }

    /// Reads `slot0` and `liquidity` concurrently. Either read failing fails
    /// the whole fetch, so a snapshot never mixes old and new values.
    pub async fn fetch_pool_info(&self) -> Result<PoolInfo, ContractError> {
        let (slot0, liquidity) = futures::try_join!(
            self.pool.read(IUniswapV3Pool::slot0Call {}),
            self.pool.read(IUniswapV3Pool::liquidityCall {})
        )
        .inspect_err(|e| {
            tracing::error!(pool = %self.pool.address(), "failed to fetch pool info: {e}")
        })?;

        let info = PoolInfo {
            sqrt_price_x96: slot0.sqrtPriceX96.into(),
            tick:           slot0.tick.as_i32(),
            liquidity
        };
        tracing::debug!(pool = %self.pool.address(), tick = info.tick, liquidity, "fetched pool info");

        Ok(info)
    }

    /// Looks up the pool the factory deployed for a token pair and fee tier.
    /// The factory answers the zero address when no such pool exists.
    pub async fn get_pool_address(
        &self,
        token_a: Address,
        token_b: Address,
        fee: U24
    ) -> Result<Address, ContractError> {
        self.factory
            .read(IUniswapV3Factory::getPoolCall { tokenA: token_a, tokenB: token_b, fee })
            .await
    }
}
