//! Command line entry point: configuration, logging and the commands that
//! drive the dashboard against a live endpoint.
mod commands;
mod config;
mod repl;

use alloy::primitives::Address;
use clap::Parser;
pub use config::{DashboardConfig, KeyConfig};
use poolscope_types::primitive::USDC_ETH_POOL_FEE;
use tracing::Level;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[clap(name = "poolscope", version, about = "Uniswap V3 pool and ERC20 token dashboard")]
pub struct Cli {
    #[clap(flatten)]
    pub config:    DashboardConfig,
    /// -v info, -vv debug, -vvv trace. Logs go to stderr.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
    #[clap(subcommand)]
    pub command:   Command
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Read the pool's current price, tick and liquidity
    Pool {
        /// print the snapshot as JSON
        #[clap(long)]
        json: bool
    },
    /// Look up a pool through the factory
    PoolAddress {
        #[clap(long)]
        token_a: Address,
        #[clap(long)]
        token_b: Address,
        /// fee tier in hundredths of a bip
        #[clap(
            long,
            default_value_t = USDC_ETH_POOL_FEE,
            value_parser = clap::value_parser!(u32).range(..=0xFF_FFFF)
        )]
        fee:     u32
    },
    /// Read a token balance, of the connected wallet unless an owner is given
    Balance {
        #[clap(long)]
        owner: Option<Address>
    },
    /// Transfer tokens from the connected wallet
    Transfer {
        #[clap(long)]
        to:     String,
        /// amount in whole tokens, e.g. 12.34
        #[clap(long)]
        amount: String
    },
    /// List the contracts and functions the dashboard calls
    Abi,
    /// Interactive dashboard on stdin/stdout
    Dashboard
}

/// Parses the command line, sets up logging and runs the chosen command.
#[inline]
pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(commands::execute(cli))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(
                    filter::Targets::new()
                        .with_target("poolscope", level)
                        .with_target("poolscope_cli", level)
                        .with_target("poolscope_eth", level)
                        .with_target("poolscope_types", level)
                        .with_target("uniswap_v3", level)
                        .with_target("dashboard", level)
                )
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from(["poolscope", "pool", "--json", "--chain", "sepolia", "-vv"]);
        assert_matches!(cli.command, Command::Pool { json: true });
        assert_eq!(cli.config.chain, "sepolia");
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn pool_address_default_fee() {
        let cli = Cli::parse_from([
            "poolscope",
            "pool-address",
            "--token-a",
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "--token-b",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        ]);
        assert_matches!(cli.command, Command::PoolAddress { fee: 3000, .. });
    }

    #[test]
    fn fee_must_fit_uint24() {
        let result = Cli::try_parse_from([
            "poolscope",
            "pool-address",
            "--token-a",
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "--token-b",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "--fee",
            "16777216"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn transfer_takes_raw_text() {
        let cli = Cli::parse_from(["poolscope", "transfer", "--to", "0xdEaD", "--amount", "5"]);
        assert_matches!(
            cli.command,
            Command::Transfer { to, amount } if to == "0xdEaD" && amount == "5"
        );
    }
}
