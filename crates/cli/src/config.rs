use std::path::PathBuf;

use alloy::primitives::Address;
use alloy_chains::NamedChain;
use dashboard::{PoolDecimals, TokenMeta};
use poolscope_types::{
    contract_bindings::{ContractConfig, Erc20, UniswapV3Factory, UniswapV3Pool},
    primitive::{
        ETH_DEFAULT_RPC, SUPPORTED_CHAINS, UNISWAP_V3_FACTORY_ADDRESS, USDC_ADDRESS,
        USDC_DECIMALS, USDC_ETH_POOL_ADDRESS, USDC_SYMBOL, WETH_DECIMALS
    }
};
use url::Url;

#[derive(Debug, Clone, clap::Args)]
pub struct DashboardConfig {
    /// JSON-RPC endpoint for every read and write. HTTP only.
    #[clap(long, default_value = ETH_DEFAULT_RPC, global = true)]
    pub rpc_url:         String,
    /// chain the endpoint must serve
    #[clap(long, default_value = "mainnet", global = true)]
    pub chain:           String,
    #[clap(flatten)]
    pub key_config:      KeyConfig,
    /// ERC20 token shown in the balance panel
    #[clap(long, default_value_t = USDC_ADDRESS, global = true)]
    pub token_address:   Address,
    #[clap(long, default_value = USDC_SYMBOL, global = true)]
    pub token_symbol:    String,
    #[clap(long, default_value_t = USDC_DECIMALS, global = true)]
    pub token_decimals:  u8,
    #[clap(long, default_value_t = USDC_ETH_POOL_ADDRESS, global = true)]
    pub pool_address:    Address,
    #[clap(long, default_value_t = UNISWAP_V3_FACTORY_ADDRESS, global = true)]
    pub factory_address: Address,
    /// decimals of the pool's token0, only used to display a price
    #[clap(long, default_value_t = USDC_DECIMALS, global = true)]
    pub token0_decimals: u8,
    /// decimals of the pool's token1, only used to display a price
    #[clap(long, default_value_t = WETH_DECIMALS, global = true)]
    pub token1_decimals: u8
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rpc_url:         ETH_DEFAULT_RPC.to_string(),
            chain:           "mainnet".to_string(),
            key_config:      KeyConfig::default(),
            token_address:   USDC_ADDRESS,
            token_symbol:    USDC_SYMBOL.to_string(),
            token_decimals:  USDC_DECIMALS,
            pool_address:    USDC_ETH_POOL_ADDRESS,
            factory_address: UNISWAP_V3_FACTORY_ADDRESS,
            token0_decimals: USDC_DECIMALS,
            token1_decimals: WETH_DECIMALS
        }
    }
}

impl DashboardConfig {
    /// Validated RPC endpoint.
    pub fn rpc_url(&self) -> eyre::Result<Url> {
        Self::validate_rpc_url(&self.rpc_url)
    }

    pub fn validate_rpc_url(rpc_url: &str) -> eyre::Result<Url> {
        let url = Url::parse(rpc_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            "ws" | "wss" => Err(eyre::eyre!("RPC URL must be HTTP, not WS")),
            scheme => Err(eyre::eyre!("unsupported RPC URL scheme `{scheme}`"))
        }
    }

    pub fn named_chain(&self) -> eyre::Result<NamedChain> {
        match self.chain.parse::<NamedChain>() {
            Ok(chain @ (NamedChain::Mainnet | NamedChain::Sepolia)) => Ok(chain),
            Ok(chain) => Err(eyre::eyre!(
                "we do not support chain {chain}, expected one of {SUPPORTED_CHAINS:?}"
            )),
            Err(_) => Err(eyre::eyre!("unknown chain `{}`", self.chain))
        }
    }

    pub fn chain_id(&self) -> eyre::Result<u64> {
        Ok(self.named_chain()? as u64)
    }

    pub fn token_contract(&self) -> ContractConfig<Erc20> {
        ContractConfig::new(self.token_address, Erc20)
    }

    pub fn pool_contract(&self) -> ContractConfig<UniswapV3Pool> {
        ContractConfig::new(self.pool_address, UniswapV3Pool)
    }

    pub fn factory_contract(&self) -> ContractConfig<UniswapV3Factory> {
        ContractConfig::new(self.factory_address, UniswapV3Factory)
    }

    pub fn token_meta(&self) -> TokenMeta {
        TokenMeta { symbol: self.token_symbol.clone(), decimals: self.token_decimals }
    }

    pub fn pool_decimals(&self) -> PoolDecimals {
        PoolDecimals { token0: self.token0_decimals, token1: self.token1_decimals }
    }
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct KeyConfig {
    /// file holding the hex secret key used when connecting a wallet
    #[clap(long, global = true)]
    pub local_secret_key_location: Option<PathBuf>
}
