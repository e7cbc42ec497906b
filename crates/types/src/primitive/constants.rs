use alloy_primitives::{Address, address};

/// Public mainnet endpoint used when no `--rpc-url` is given. There is no
/// fallback endpoint.
pub const ETH_DEFAULT_RPC: &str = "https://eth.llamarpc.com";

/// Chains the dashboard is willing to talk to.
pub const SUPPORTED_CHAINS: [&str; 2] = ["mainnet", "sepolia"];

pub const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const USDC_SYMBOL: &str = "USDC";
pub const USDC_DECIMALS: u8 = 6;

pub const WETH_DECIMALS: u8 = 18;

/// USDC/ETH pool, 0.3% fee tier. token0 is USDC, token1 is WETH.
pub const USDC_ETH_POOL_ADDRESS: Address = address!("8ad599c3a0ff1de082011efddc58f1908eb6e6d8");
pub const USDC_ETH_POOL_FEE: u32 = 3000;

pub const UNISWAP_V3_FACTORY_ADDRESS: Address =
    address!("1F98431c8aD98523631AE4a59f267346ea31F984");
